use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed or contradictory input. Never retried.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found")]
    NotFound,

    /// Any failure reported by the underlying store.
    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }
}

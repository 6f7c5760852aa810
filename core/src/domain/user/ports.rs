use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::entities::{User, UserSummary},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserService: Send + Sync {
    fn get_users(&self) -> impl Future<Output = Result<Vec<UserSummary>, CoreError>> + Send;

    fn get_user(&self, user_id: i32) -> impl Future<Output = Result<User, CoreError>> + Send;

    /// Flips the `active` flag and returns the account as stored afterwards.
    fn toggle_user_active(
        &self,
        user_id: i32,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn fetch_users(&self) -> impl Future<Output = Result<Vec<UserSummary>, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: i32,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    /// Negates `active` in a single statement; `None` when no row matched.
    fn toggle_active(
        &self,
        user_id: i32,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}

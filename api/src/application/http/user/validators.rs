use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleUserActiveValidator {
    #[validate(range(min = 1, message = "userId must be positive"))]
    pub user_id: i32,
}

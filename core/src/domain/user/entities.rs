use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row of the user administration list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub active: bool,
}

/// Account as exposed to administrators. The password never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub role_id: Option<i32>,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub office_id: Option<i32>,
    pub birthdate: Option<NaiveDate>,
    pub active: bool,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
            active: user.active,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub id: i32,
    pub country_id: Option<i32>,
    /// Three-letter IATA code, e.g. `AUH`.
    pub iata_code: String,
    pub name: String,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseAmenitiesValidator {
    /// Amenity ids the ticket should hold afterwards.
    #[validate(length(min = 1, message = "No amenities selected."))]
    pub selected_amenities: Vec<i32>,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An amenity as offered on a given ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketAmenity {
    pub id: i32,
    pub service: String,
    /// Price paid when purchased, otherwise the current list price.
    pub price: Decimal,
    pub purchased: bool,
}

/// Amenity bought for a ticket, at the price charged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityPurchase {
    pub amenity_id: i32,
    pub price: Decimal,
}

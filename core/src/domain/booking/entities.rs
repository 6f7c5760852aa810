use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One upcoming, confirmed flight of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookedFlight {
    pub flight_number: String,
    pub flight_date: NaiveDate,
    pub flight_time: NaiveTime,
    /// Departure airport display name.
    pub departure: String,
    /// Arrival airport display name.
    pub arrival: String,
}

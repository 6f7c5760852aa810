use aerodesk_core::domain::schedule::{
    sort::ScheduleOrder,
    value_objects::{CabinClass, CreateScheduleInput, SearchCriteria, UpdateScheduleInput},
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::application::http::server::api_entities::api_error::ApiError;

/// Raw query string of `GET /schedules`. Every value arrives as text so that
/// malformed input is reported through [`ApiError`].
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct SearchSchedulesQuery {
    /// IATA code of the departure airport.
    pub departure_airport_code: Option<String>,
    /// IATA code of the arrival airport.
    pub arrival_airport_code: Option<String>,
    /// ISO date (`2024-06-01`) or date-time.
    pub flight_date: Option<String>,
    pub return_flight_date: Option<String>,
    pub flight_number: Option<String>,
    /// `economy`, `business` or `first`.
    pub cabin_class: Option<String>,
    /// Widen `flightDate` to three days either side.
    pub flexible_dates: Option<String>,
    /// JSON array such as `[{"field":"economyPrice","order":"desc"}]`.
    pub sort_by: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SortByEntry {
    field: String,
    order: Option<String>,
}

impl SearchSchedulesQuery {
    pub fn into_criteria(self) -> Result<SearchCriteria, ApiError> {
        let flight_date = self
            .flight_date
            .as_deref()
            .map(|value| parse_date("flightDate", value))
            .transpose()?;
        let return_flight_date = self
            .return_flight_date
            .as_deref()
            .map(|value| parse_date("returnFlightDate", value))
            .transpose()?;

        let cabin_class = match present(self.cabin_class.as_deref()) {
            Some(value) => value.parse::<CabinClass>()?,
            None => CabinClass::default(),
        };

        let flexible_dates = match present(self.flexible_dates.as_deref()) {
            Some(value) => parse_flag("flexibleDates", value)?,
            None => false,
        };

        let sort = match present(self.sort_by.as_deref()) {
            Some(value) => parse_sort(value)?,
            None => ScheduleOrder::default(),
        };

        Ok(SearchCriteria {
            departure_airport_code: self.departure_airport_code,
            arrival_airport_code: self.arrival_airport_code,
            flight_date,
            return_flight_date,
            flight_number: self.flight_number,
            cabin_class,
            flexible_dates,
            sort,
        })
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Accepts `YYYY-MM-DD`, RFC 3339 or a naive ISO date-time; keeps the date.
pub fn parse_date(name: &str, value: &str) -> Result<NaiveDate, ApiError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Ok(datetime.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime.date());
        }
    }

    Err(ApiError::BadRequest(format!(
        "{name} must be an ISO date such as 2024-06-01, got '{value}'"
    )))
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ApiError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ApiError::BadRequest(format!(
            "{name} must be true or false, got '{value}'"
        ))),
    }
}

fn parse_sort(value: &str) -> Result<ScheduleOrder, ApiError> {
    let entries: Vec<SortByEntry> = serde_json::from_str(value).map_err(|e| {
        ApiError::BadRequest(format!(
            "sortBy must be a JSON array of {{field, order}} objects: {e}"
        ))
    })?;

    let order = ScheduleOrder::parse(entries.into_iter().map(|e| (e.field, e.order)))?;
    Ok(order)
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price < Decimal::ZERO {
        return Err(ValidationError::new("economy_price")
            .with_message("economyPrice must not be negative".into()));
    }
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleValidator {
    #[validate(length(min = 1, max = 10, message = "flightNumber is required"))]
    pub flight_number: String,

    #[schema(value_type = String, format = Date, example = "2024-06-01")]
    pub date: NaiveDate,

    #[schema(value_type = String, example = "08:30:00")]
    pub time: NaiveTime,

    #[validate(range(min = 1, message = "routeId must be positive"))]
    pub route_id: i32,

    #[validate(range(min = 1, message = "aircraftId must be positive"))]
    pub aircraft_id: i32,

    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 450.0)]
    pub economy_price: Decimal,

    #[serde(default)]
    pub confirmed: bool,
}

impl From<CreateScheduleValidator> for CreateScheduleInput {
    fn from(payload: CreateScheduleValidator) -> Self {
        Self {
            flight_number: payload.flight_number,
            date: payload.date,
            time: payload.time,
            route_id: payload.route_id,
            aircraft_id: payload.aircraft_id,
            economy_price: payload.economy_price,
            confirmed: payload.confirmed,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateScheduleValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 10, message = "flightNumber must not be empty"))]
    pub flight_number: Option<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date)]
    pub date: Option<NaiveDate>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub time: Option<NaiveTime>,

    #[serde(default)]
    #[validate(range(min = 1, message = "routeId must be positive"))]
    pub route_id: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, message = "aircraftId must be positive"))]
    pub aircraft_id: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = Option<f64>)]
    pub economy_price: Option<Decimal>,

    #[serde(default)]
    pub confirmed: Option<bool>,
}

impl From<UpdateScheduleValidator> for UpdateScheduleInput {
    fn from(payload: UpdateScheduleValidator) -> Self {
        Self {
            flight_number: payload.flight_number,
            date: payload.date,
            time: payload.time,
            route_id: payload.route_id,
            aircraft_id: payload.aircraft_id,
            economy_price: payload.economy_price,
            confirmed: payload.confirmed,
        }
    }
}

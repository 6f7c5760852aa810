use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::{entities::app_errors::CoreError, non_blank},
    schedule::sort::ScheduleOrder,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    #[default]
    Economy,
    Business,
    First,
}

impl FromStr for CabinClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "economy" => Ok(CabinClass::Economy),
            "business" => Ok(CabinClass::Business),
            "first" => Ok(CabinClass::First),
            other => Err(CoreError::validation(format!(
                "unknown cabin class '{other}', expected economy, business or first"
            ))),
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CabinClass::Economy => "economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        };
        f.write_str(name)
    }
}

/// Parameters of a schedule lookup. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub departure_airport_code: Option<String>,
    pub arrival_airport_code: Option<String>,
    pub flight_date: Option<NaiveDate>,
    pub return_flight_date: Option<NaiveDate>,
    pub flight_number: Option<String>,
    pub cabin_class: CabinClass,
    pub flexible_dates: bool,
    pub sort: ScheduleOrder,
}

impl SearchCriteria {
    pub fn departure_code(&self) -> Option<String> {
        non_blank(self.departure_airport_code.as_deref()).map(str::to_ascii_uppercase)
    }

    pub fn arrival_code(&self) -> Option<String> {
        non_blank(self.arrival_airport_code.as_deref()).map(str::to_ascii_uppercase)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if let (Some(departure), Some(arrival)) = (self.departure_code(), self.arrival_code())
            && departure == arrival
        {
            return Err(CoreError::validation(
                "departure and arrival airports must be different",
            ));
        }

        if let (Some(outbound), Some(inbound)) = (self.flight_date, self.return_flight_date)
            && inbound <= outbound
        {
            return Err(CoreError::validation(
                "return flight date must be after the outbound flight date",
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateScheduleInput {
    pub flight_number: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub route_id: i32,
    pub aircraft_id: i32,
    pub economy_price: Decimal,
    pub confirmed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateScheduleInput {
    pub flight_number: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub route_id: Option<i32>,
    pub aircraft_id: Option<i32>,
    pub economy_price: Option<Decimal>,
    pub confirmed: Option<bool>,
}

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    airport::entities::Airport,
    common::entities::app_errors::CoreError,
    schedule::{
        pricing::final_price,
        value_objects::{CabinClass, UpdateScheduleInput},
    },
};

/// One flight on a specific date, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i32,
    pub flight_number: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub route_id: i32,
    pub aircraft_id: i32,
    pub economy_price: Decimal,
    pub confirmed: bool,
}

impl Schedule {
    /// Merges the provided fields onto the record; absent fields are kept.
    pub fn apply(&mut self, input: UpdateScheduleInput) -> Result<(), CoreError> {
        if let Some(price) = input.economy_price {
            ensure_price(price)?;
            self.economy_price = price;
        }
        if let Some(flight_number) = input.flight_number {
            self.flight_number = flight_number;
        }
        if let Some(date) = input.date {
            self.date = date;
        }
        if let Some(time) = input.time {
            self.time = time;
        }
        if let Some(route_id) = input.route_id {
            self.route_id = route_id;
        }
        if let Some(aircraft_id) = input.aircraft_id {
            self.aircraft_id = aircraft_id;
        }
        if let Some(confirmed) = input.confirmed {
            self.confirmed = confirmed;
        }

        Ok(())
    }
}

pub(crate) fn ensure_price(price: Decimal) -> Result<(), CoreError> {
    if price < Decimal::ZERO {
        return Err(CoreError::validation("economy price must not be negative"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: i32,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub distance: i32,
    pub flight_time: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    pub id: i32,
    pub name: String,
    pub make_model: Option<String>,
    pub total_seats: i32,
    pub economy_seats: i32,
    pub business_seats: i32,
}

/// A schedule with its route, both endpoint airports and aircraft resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDetails {
    #[serde(flatten)]
    pub schedule: Schedule,
    pub route: Route,
    pub aircraft: Aircraft,
}

/// Search result: the enriched schedule plus the fare for the requested cabin.
/// The stored economy price is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricedSchedule {
    #[serde(flatten)]
    pub details: ScheduleDetails,
    pub cabin_class: CabinClass,
    pub final_price: i64,
}

impl PricedSchedule {
    pub fn new(details: ScheduleDetails, cabin_class: CabinClass) -> Result<Self, CoreError> {
        let final_price = final_price(details.schedule.economy_price, cabin_class)?;

        Ok(Self {
            details,
            cabin_class,
            final_price,
        })
    }
}

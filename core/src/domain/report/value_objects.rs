use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceReportFilter {
    pub flight_number: Option<String>,
    pub flight_date: Option<NaiveDate>,
}

/// Which flight dates a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportDates {
    On(NaiveDate),
    From(NaiveDate),
}

impl ReportDates {
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            ReportDates::On(day) => date == *day,
            ReportDates::From(first) => date >= *first,
        }
    }
}

/// An amenity purchased on a confirmed ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReportLine {
    pub flight_number: String,
    pub service: String,
    /// Price paid at purchase time.
    pub price: Decimal,
}

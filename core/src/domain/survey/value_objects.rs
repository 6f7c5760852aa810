use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Dimension survey responses can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SurveyField {
    Gender,
    Age,
    CabinType,
    Departure,
    Arrival,
}

impl SurveyField {
    pub const ALL: [SurveyField; 5] = [
        SurveyField::Gender,
        SurveyField::Age,
        SurveyField::CabinType,
        SurveyField::Departure,
        SurveyField::Arrival,
    ];

    /// Column of the `survey` table backing this dimension.
    pub fn column(self) -> &'static str {
        match self {
            SurveyField::Gender => "gender",
            SurveyField::Age => "age",
            SurveyField::CabinType => "cabin_type",
            SurveyField::Departure => "departure",
            SurveyField::Arrival => "arrival",
        }
    }
}

impl FromStr for SurveyField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gender" => Ok(SurveyField::Gender),
            "age" => Ok(SurveyField::Age),
            "cabinType" | "cabin_type" => Ok(SurveyField::CabinType),
            "departure" => Ok(SurveyField::Departure),
            "arrival" => Ok(SurveyField::Arrival),
            other => Err(CoreError::validation(format!(
                "unknown survey field '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SurveyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurveyField::CabinType => "cabinType",
            other => other.column(),
        };
        f.write_str(name)
    }
}

/// Answer totals for one value of a dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SurveyGroupStats {
    /// Group value rendered as text; `None` for responses without it.
    pub value: Option<String>,
    pub q1: i64,
    pub q2: i64,
    pub q3: i64,
    pub q4: i64,
    /// Number of responses with an answer to q1.
    pub count: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SurveyStats {
    pub gender: Vec<SurveyGroupStats>,
    pub age: Vec<SurveyGroupStats>,
    pub cabin_type: Vec<SurveyGroupStats>,
    pub departure: Vec<SurveyGroupStats>,
    pub arrival: Vec<SurveyGroupStats>,
}

impl SurveyStats {
    pub fn set(&mut self, field: SurveyField, groups: Vec<SurveyGroupStats>) {
        match field {
            SurveyField::Gender => self.gender = groups,
            SurveyField::Age => self.age = groups,
            SurveyField::CabinType => self.cabin_type = groups,
            SurveyField::Departure => self.departure = groups,
            SurveyField::Arrival => self.arrival = groups,
        }
    }
}

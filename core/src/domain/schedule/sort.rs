//! Ordering of schedule lookups.
//!
//! Sort keys are a closed set; each key maps to exactly one stored column in
//! the persistence adapter.

use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    common::entities::app_errors::CoreError, schedule::entities::ScheduleDetails,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SortField {
    #[serde(rename = "date")]
    Date,
    #[serde(rename = "economyPrice")]
    EconomyPrice,
    #[serde(rename = "confirmed")]
    Confirmed,
}

impl FromStr for SortField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date" => Ok(SortField::Date),
            "economyPrice" => Ok(SortField::EconomyPrice),
            "confirmed" => Ok(SortField::Confirmed),
            other => Err(CoreError::validation(format!(
                "unknown sort field '{other}', expected date, economyPrice or confirmed"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(CoreError::validation(format!(
                "unknown sort order '{other}', expected asc or desc"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SortKey {
    pub field: SortField,
    #[serde(rename = "order")]
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    fn compare(&self, a: &ScheduleDetails, b: &ScheduleDetails) -> Ordering {
        let (a, b) = (&a.schedule, &b.schedule);
        let ordering = match self.field {
            SortField::Date => a.date.cmp(&b.date),
            SortField::EconomyPrice => a.economy_price.cmp(&b.economy_price),
            SortField::Confirmed => a.confirmed.cmp(&b.confirmed),
        };

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Multi-key ordering: the first key is primary, later keys break ties in
/// the order given. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOrder {
    keys: Vec<SortKey>,
}

impl Default for ScheduleOrder {
    fn default() -> Self {
        Self {
            keys: vec![SortKey::new(SortField::Date, SortDirection::Asc)],
        }
    }
}

impl ScheduleOrder {
    /// An empty list falls back to the default ordering.
    pub fn new(keys: Vec<SortKey>) -> Self {
        if keys.is_empty() {
            Self::default()
        } else {
            Self { keys }
        }
    }

    /// Builds an ordering from raw `(field, order)` pairs. A missing order
    /// means ascending.
    pub fn parse<I, F, D>(pairs: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (F, Option<D>)>,
        F: AsRef<str>,
        D: AsRef<str>,
    {
        let keys = pairs
            .into_iter()
            .map(|(field, direction)| {
                let field = field.as_ref().parse::<SortField>()?;
                let direction = direction
                    .map(|d| d.as_ref().parse::<SortDirection>())
                    .transpose()?
                    .unwrap_or_default();
                Ok(SortKey::new(field, direction))
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Self::new(keys))
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Same ordering the persistence adapter produces, identifier last.
    pub fn compare(&self, a: &ScheduleDetails, b: &ScheduleDetails) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.schedule.id.cmp(&b.schedule.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_utils::schedule_details;

    #[test]
    fn default_is_date_ascending() {
        assert_eq!(
            ScheduleOrder::default().keys(),
            &[SortKey::new(SortField::Date, SortDirection::Asc)]
        );
        assert_eq!(ScheduleOrder::new(Vec::new()), ScheduleOrder::default());
    }

    #[test]
    fn parse_keeps_input_order() {
        let order = ScheduleOrder::parse([
            ("economyPrice", Some("desc")),
            ("confirmed", None),
            ("date", Some("ASC")),
        ])
        .unwrap();

        assert_eq!(
            order.keys(),
            &[
                SortKey::new(SortField::EconomyPrice, SortDirection::Desc),
                SortKey::new(SortField::Confirmed, SortDirection::Asc),
                SortKey::new(SortField::Date, SortDirection::Asc),
            ]
        );
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = ScheduleOrder::parse([("flightNumber", Some("asc"))]);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn unknown_direction_is_rejected() {
        let result = ScheduleOrder::parse([("date", Some("sideways"))]);
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn second_key_breaks_ties() {
        let a = schedule_details(1, "AUH", "DOH", "2024-06-01", 300);
        let b = schedule_details(2, "AUH", "DOH", "2024-06-01", 200);
        let c = schedule_details(3, "AUH", "DOH", "2024-05-30", 900);

        let order = ScheduleOrder::parse([("date", Some("asc")), ("economyPrice", Some("asc"))])
            .unwrap();
        let mut rows = vec![a.clone(), b.clone(), c.clone()];
        rows.sort_by(|x, y| order.compare(x, y));

        let ids: Vec<i32> = rows.iter().map(|r| r.schedule.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn identifier_is_the_final_tie_breaker() {
        let a = schedule_details(7, "AUH", "DOH", "2024-06-01", 100);
        let b = schedule_details(4, "AUH", "DOH", "2024-06-01", 100);

        assert_eq!(ScheduleOrder::default().compare(&a, &b), Ordering::Greater);
    }
}

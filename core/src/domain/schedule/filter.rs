//! Filter predicates for schedule lookups.
//!
//! A [`ScheduleFilter`] is a conjunction of independent predicates, one per
//! search parameter that was supplied. Absent parameters contribute nothing.

use chrono::{Days, NaiveDate};

use crate::domain::{
    common::{entities::app_errors::CoreError, non_blank},
    schedule::{entities::ScheduleDetails, value_objects::SearchCriteria},
};

/// Half-width of the flexible-date window, in calendar days.
pub const FLEXIBLE_DATE_WINDOW_DAYS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchedulePredicate {
    DepartureAirport(String),
    ArrivalAirport(String),
    DateEquals(NaiveDate),
    /// Inclusive on both ends.
    DateBetween { from: NaiveDate, to: NaiveDate },
    FlightNumber(String),
}

impl SchedulePredicate {
    pub fn matches(&self, details: &ScheduleDetails) -> bool {
        let schedule = &details.schedule;
        match self {
            SchedulePredicate::DepartureAirport(code) => {
                details.route.departure_airport.iata_code == *code
            }
            SchedulePredicate::ArrivalAirport(code) => {
                details.route.arrival_airport.iata_code == *code
            }
            SchedulePredicate::DateEquals(date) => schedule.date == *date,
            SchedulePredicate::DateBetween { from, to } => {
                *from <= schedule.date && schedule.date <= *to
            }
            SchedulePredicate::FlightNumber(number) => schedule.flight_number == *number,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleFilter {
    predicates: Vec<SchedulePredicate>,
}

impl ScheduleFilter {
    /// Validates the criteria first; no filter is built for contradictory input.
    pub fn from_criteria(criteria: &SearchCriteria) -> Result<Self, CoreError> {
        criteria.validate()?;

        let departure = criteria
            .departure_code()
            .map(SchedulePredicate::DepartureAirport);
        let arrival = criteria
            .arrival_code()
            .map(SchedulePredicate::ArrivalAirport);
        let date = criteria
            .flight_date
            .map(|date| date_predicate(date, criteria.flexible_dates));
        let flight_number = non_blank(criteria.flight_number.as_deref())
            .map(|number| SchedulePredicate::FlightNumber(number.to_string()));

        Ok(Self {
            predicates: [departure, arrival, date, flight_number]
                .into_iter()
                .flatten()
                .collect(),
        })
    }

    pub fn predicates(&self) -> &[SchedulePredicate] {
        &self.predicates
    }

    /// True when no restriction applies.
    pub fn is_open(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, details: &ScheduleDetails) -> bool {
        self.predicates.iter().all(|p| p.matches(details))
    }
}

fn date_predicate(date: NaiveDate, flexible: bool) -> SchedulePredicate {
    if !flexible {
        return SchedulePredicate::DateEquals(date);
    }

    let window = Days::new(FLEXIBLE_DATE_WINDOW_DAYS);
    SchedulePredicate::DateBetween {
        from: date.checked_sub_days(window).unwrap_or(NaiveDate::MIN),
        to: date.checked_add_days(window).unwrap_or(NaiveDate::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_utils::schedule_details;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn empty_criteria_build_an_open_filter() {
        let filter = ScheduleFilter::from_criteria(&SearchCriteria::default()).unwrap();

        assert!(filter.is_open());
        assert!(filter.matches(&schedule_details(1, "AUH", "DOH", "2024-06-01", 100)));
    }

    #[test]
    fn identical_endpoints_fail_before_building() {
        let criteria = SearchCriteria {
            departure_airport_code: Some("DOH".to_string()),
            arrival_airport_code: Some("DOH".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            ScheduleFilter::from_criteria(&criteria),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn every_supplied_parameter_adds_one_predicate() {
        let criteria = SearchCriteria {
            departure_airport_code: Some("auh".to_string()),
            arrival_airport_code: Some("DOH".to_string()),
            flight_date: Some(date("2024-06-01")),
            flight_number: Some(" EY101 ".to_string()),
            ..Default::default()
        };

        let filter = ScheduleFilter::from_criteria(&criteria).unwrap();

        assert_eq!(
            filter.predicates(),
            &[
                SchedulePredicate::DepartureAirport("AUH".to_string()),
                SchedulePredicate::ArrivalAirport("DOH".to_string()),
                SchedulePredicate::DateEquals(date("2024-06-01")),
                SchedulePredicate::FlightNumber("EY101".to_string()),
            ]
        );
    }

    #[test]
    fn route_filter_requires_both_endpoints() {
        let criteria = SearchCriteria {
            departure_airport_code: Some("AUH".to_string()),
            arrival_airport_code: Some("DOH".to_string()),
            ..Default::default()
        };
        let filter = ScheduleFilter::from_criteria(&criteria).unwrap();

        assert!(filter.matches(&schedule_details(1, "AUH", "DOH", "2024-06-01", 100)));
        assert!(!filter.matches(&schedule_details(2, "AUH", "CAI", "2024-06-01", 100)));
        assert!(!filter.matches(&schedule_details(3, "BAH", "DOH", "2024-06-01", 100)));
        assert!(!filter.matches(&schedule_details(4, "DOH", "AUH", "2024-06-01", 100)));
    }

    #[test]
    fn flexible_window_spans_three_days_each_way() {
        let criteria = SearchCriteria {
            flight_date: Some(date("2024-06-01")),
            flexible_dates: true,
            ..Default::default()
        };
        let filter = ScheduleFilter::from_criteria(&criteria).unwrap();

        assert_eq!(
            filter.predicates(),
            &[SchedulePredicate::DateBetween {
                from: date("2024-05-29"),
                to: date("2024-06-04"),
            }]
        );

        let on = |d: &str| filter.matches(&schedule_details(1, "AUH", "DOH", d, 100));
        assert!(!on("2024-05-28"));
        assert!(on("2024-05-29"));
        assert!(on("2024-06-01"));
        assert!(on("2024-06-04"));
        assert!(!on("2024-06-05"));
    }

    #[test]
    fn exact_date_without_flexible_flag() {
        let criteria = SearchCriteria {
            flight_date: Some(date("2024-06-01")),
            ..Default::default()
        };
        let filter = ScheduleFilter::from_criteria(&criteria).unwrap();

        assert!(filter.matches(&schedule_details(1, "AUH", "DOH", "2024-06-01", 100)));
        assert!(!filter.matches(&schedule_details(1, "AUH", "DOH", "2024-06-02", 100)));
    }
}

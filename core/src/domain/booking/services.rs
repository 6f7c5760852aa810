use chrono::{Duration, Utc};
use tracing::instrument;

use crate::domain::{
    airport::ports::AirportRepository,
    amenity::ports::AmenityRepository,
    booking::{
        entities::BookedFlight,
        ports::{BookingRepository, BookingService},
    },
    common::{entities::app_errors::CoreError, non_blank, services::Service},
    health::ports::HealthCheckRepository,
    report::ports::ServiceReportRepository,
    schedule::ports::ScheduleRepository,
    survey::ports::SurveyRepository,
    user::ports::UserRepository,
};

/// Flights departing sooner than this can no longer be managed.
pub const BOOKING_LOCK_HOURS: i64 = 24;

impl<S, A, B, AM, RP, SV, U, HC> BookingService for Service<S, A, B, AM, RP, SV, U, HC>
where
    S: ScheduleRepository,
    A: AirportRepository,
    B: BookingRepository,
    AM: AmenityRepository,
    RP: ServiceReportRepository,
    SV: SurveyRepository,
    U: UserRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_booking_details(
        &self,
        booking_reference: String,
    ) -> Result<Vec<BookedFlight>, CoreError> {
        let booking_reference = non_blank(Some(booking_reference.as_str()))
            .ok_or_else(|| CoreError::validation("booking reference is required"))?
            .to_ascii_uppercase();

        let departing_from = Utc::now().naive_utc() + Duration::hours(BOOKING_LOCK_HOURS);

        let flights = self
            .booking_repository
            .fetch_upcoming_flights(booking_reference, departing_from)
            .await?;

        if flights.is_empty() {
            return Err(CoreError::NotFound);
        }

        Ok(flights)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;

    use super::*;
    use crate::domain::{
        airport::ports::MockAirportRepository, amenity::ports::MockAmenityRepository,
        health::ports::MockHealthCheckRepository, report::ports::MockServiceReportRepository,
        schedule::ports::MockScheduleRepository, survey::ports::MockSurveyRepository,
        user::ports::MockUserRepository,
    };

    struct Ticket {
        reference: &'static str,
        confirmed: bool,
        departs_in: Duration,
        flight_number: &'static str,
    }

    struct InMemoryBookings {
        tickets: Vec<Ticket>,
        now: NaiveDateTime,
    }

    impl BookingRepository for InMemoryBookings {
        async fn fetch_upcoming_flights(
            &self,
            booking_reference: String,
            departing_from: NaiveDateTime,
        ) -> Result<Vec<BookedFlight>, CoreError> {
            Ok(self
                .tickets
                .iter()
                .filter(|t| t.reference == booking_reference && t.confirmed)
                .map(|t| (self.now + t.departs_in, t))
                .filter(|(departure, _)| *departure >= departing_from)
                .map(|(departure, t)| BookedFlight {
                    flight_number: t.flight_number.to_string(),
                    flight_date: departure.date(),
                    flight_time: departure.time(),
                    departure: "Abu Dhabi".to_string(),
                    arrival: "Doha".to_string(),
                })
                .collect())
        }
    }

    fn service(
        tickets: Vec<Ticket>,
    ) -> Service<
        MockScheduleRepository,
        MockAirportRepository,
        InMemoryBookings,
        MockAmenityRepository,
        MockServiceReportRepository,
        MockSurveyRepository,
        MockUserRepository,
        MockHealthCheckRepository,
    > {
        Service::new(
            MockScheduleRepository::new(),
            MockAirportRepository::new(),
            InMemoryBookings {
                tickets,
                now: Utc::now().naive_utc(),
            },
            MockAmenityRepository::new(),
            MockServiceReportRepository::new(),
            MockSurveyRepository::new(),
            MockUserRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn flights_inside_the_lock_window_are_hidden() {
        let service = service(vec![
            Ticket {
                reference: "ABC123",
                confirmed: true,
                departs_in: Duration::hours(3),
                flight_number: "EY100",
            },
            Ticket {
                reference: "ABC123",
                confirmed: true,
                departs_in: Duration::days(3),
                flight_number: "EY200",
            },
            Ticket {
                reference: "ABC123",
                confirmed: false,
                departs_in: Duration::days(4),
                flight_number: "EY300",
            },
        ]);

        let flights = service
            .get_booking_details("abc123".to_string())
            .await
            .unwrap();

        let numbers: Vec<&str> = flights.iter().map(|f| f.flight_number.as_str()).collect();
        assert_eq!(numbers, vec!["EY200"]);
    }

    #[tokio::test]
    async fn no_eligible_flight_is_not_found() {
        let service = service(vec![Ticket {
            reference: "ABC123",
            confirmed: true,
            departs_in: Duration::hours(23),
            flight_number: "EY100",
        }]);

        assert_eq!(
            service.get_booking_details("ABC123".to_string()).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn blank_reference_is_rejected() {
        let service = service(Vec::new());

        assert!(matches!(
            service.get_booking_details(" ".to_string()).await,
            Err(CoreError::Validation(_))
        ));
    }
}

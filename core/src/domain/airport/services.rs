use tracing::instrument;

use crate::domain::{
    airport::{
        entities::Airport,
        ports::{AirportRepository, AirportService},
    },
    amenity::ports::AmenityRepository,
    booking::ports::BookingRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    report::ports::ServiceReportRepository,
    schedule::ports::ScheduleRepository,
    survey::ports::SurveyRepository,
    user::ports::UserRepository,
};

impl<S, A, B, AM, RP, SV, U, HC> AirportService for Service<S, A, B, AM, RP, SV, U, HC>
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
    async fn get_airports(&self) -> Result<Vec<Airport>, CoreError> {
        self.airport_repository.fetch_airports().await
    }
}

use crate::domain::{
    airport::ports::AirportRepository,
    amenity::ports::AmenityRepository,
    booking::ports::BookingRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    report::ports::ServiceReportRepository,
    schedule::ports::ScheduleRepository,
    survey::ports::SurveyRepository,
    user::ports::UserRepository,
};

impl<S, A, B, AM, RP, SV, U, HC> HealthCheckService for Service<S, A, B, AM, RP, SV, U, HC>
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

use tracing::{info, instrument};

use crate::domain::{
    airport::ports::AirportRepository,
    amenity::ports::AmenityRepository,
    booking::ports::BookingRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    report::ports::ServiceReportRepository,
    schedule::ports::ScheduleRepository,
    survey::ports::SurveyRepository,
    user::{
        entities::{User, UserSummary},
        ports::{UserRepository, UserService},
    },
};

impl<S, A, B, AM, RP, SV, U, HC> UserService for Service<S, A, B, AM, RP, SV, U, HC>
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
    async fn get_users(&self) -> Result<Vec<UserSummary>, CoreError> {
        self.user_repository.fetch_users().await
    }

    #[instrument(skip(self))]
    async fn get_user(&self, user_id: i32) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(user_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn toggle_user_active(&self, user_id: i32) -> Result<User, CoreError> {
        let user = self
            .user_repository
            .toggle_active(user_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        info!(user_id, active = user.active, "user activity toggled");

        Ok(user)
    }
}

use std::sync::Arc;

use crate::domain::{
    airport::ports::AirportRepository, amenity::ports::AmenityRepository,
    booking::ports::BookingRepository, health::ports::HealthCheckRepository,
    report::ports::ServiceReportRepository, schedule::ports::ScheduleRepository,
    survey::ports::SurveyRepository, user::ports::UserRepository,
};

/// Composition root of the domain services. Every repository is handed in
/// explicitly; the per-feature service traits are implemented on this type.
pub struct Service<S, A, B, AM, RP, SV, U, HC>
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
    pub(crate) schedule_repository: Arc<S>,
    pub(crate) airport_repository: Arc<A>,
    pub(crate) booking_repository: Arc<B>,
    pub(crate) amenity_repository: Arc<AM>,
    pub(crate) report_repository: Arc<RP>,
    pub(crate) survey_repository: Arc<SV>,
    pub(crate) user_repository: Arc<U>,
    pub(crate) health_check_repository: Arc<HC>,
}

impl<S, A, B, AM, RP, SV, U, HC> Service<S, A, B, AM, RP, SV, U, HC>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        schedule_repository: S,
        airport_repository: A,
        booking_repository: B,
        amenity_repository: AM,
        report_repository: RP,
        survey_repository: SV,
        user_repository: U,
        health_check_repository: HC,
    ) -> Self {
        Self {
            schedule_repository: Arc::new(schedule_repository),
            airport_repository: Arc::new(airport_repository),
            booking_repository: Arc::new(booking_repository),
            amenity_repository: Arc::new(amenity_repository),
            report_repository: Arc::new(report_repository),
            survey_repository: Arc::new(survey_repository),
            user_repository: Arc::new(user_repository),
            health_check_repository: Arc::new(health_check_repository),
        }
    }
}

impl<S, A, B, AM, RP, SV, U, HC> Clone for Service<S, A, B, AM, RP, SV, U, HC>
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
    fn clone(&self) -> Self {
        Self {
            schedule_repository: Arc::clone(&self.schedule_repository),
            airport_repository: Arc::clone(&self.airport_repository),
            booking_repository: Arc::clone(&self.booking_repository),
            amenity_repository: Arc::clone(&self.amenity_repository),
            report_repository: Arc::clone(&self.report_repository),
            survey_repository: Arc::clone(&self.survey_repository),
            user_repository: Arc::clone(&self.user_repository),
            health_check_repository: Arc::clone(&self.health_check_repository),
        }
    }
}

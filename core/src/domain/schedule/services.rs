use tracing::{info, instrument};

use crate::domain::{
    airport::ports::AirportRepository,
    amenity::ports::AmenityRepository,
    booking::ports::BookingRepository,
    common::{entities::app_errors::CoreError, non_blank, services::Service},
    health::ports::HealthCheckRepository,
    report::ports::ServiceReportRepository,
    schedule::{
        entities::{PricedSchedule, Schedule, ScheduleDetails, ensure_price},
        filter::ScheduleFilter,
        ports::{ScheduleRepository, ScheduleService},
        value_objects::{CreateScheduleInput, SearchCriteria, UpdateScheduleInput},
    },
    survey::ports::SurveyRepository,
    user::ports::UserRepository,
};

impl<S, A, B, AM, RP, SV, U, HC> ScheduleService for Service<S, A, B, AM, RP, SV, U, HC>
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
    #[instrument(skip(self), fields(cabin_class = %criteria.cabin_class))]
    async fn search_schedules(
        &self,
        criteria: SearchCriteria,
    ) -> Result<Vec<PricedSchedule>, CoreError> {
        let filter = ScheduleFilter::from_criteria(&criteria)?;

        let schedules = self
            .schedule_repository
            .search(filter, criteria.sort.clone())
            .await?;

        schedules
            .into_iter()
            .map(|details| PricedSchedule::new(details, criteria.cabin_class))
            .collect()
    }

    #[instrument(skip(self))]
    async fn get_schedule(&self, schedule_id: i32) -> Result<ScheduleDetails, CoreError> {
        self.schedule_repository
            .get_details_by_id(schedule_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn create_schedule(&self, input: CreateScheduleInput) -> Result<Schedule, CoreError> {
        if non_blank(Some(input.flight_number.as_str())).is_none() {
            return Err(CoreError::validation("flight number is required"));
        }
        ensure_price(input.economy_price)?;

        let schedule = self.schedule_repository.create_schedule(input).await?;
        info!(schedule_id = schedule.id, "schedule created");

        Ok(schedule)
    }

    #[instrument(skip(self))]
    async fn update_schedule(
        &self,
        schedule_id: i32,
        input: UpdateScheduleInput,
    ) -> Result<Schedule, CoreError> {
        let mut schedule = self
            .schedule_repository
            .get_by_id(schedule_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        schedule.apply(input)?;

        self.schedule_repository.update_schedule(schedule).await
    }

    #[instrument(skip(self))]
    async fn toggle_schedule_status(&self, schedule_id: i32) -> Result<Schedule, CoreError> {
        let schedule = self
            .schedule_repository
            .toggle_confirmed(schedule_id)
            .await?
            .ok_or(CoreError::NotFound)?;
        info!(schedule_id, confirmed = schedule.confirmed, "schedule status toggled");

        Ok(schedule)
    }

    #[instrument(skip(self))]
    async fn delete_schedule(&self, schedule_id: i32) -> Result<(), CoreError> {
        if self.schedule_repository.delete_schedule(schedule_id).await? {
            Ok(())
        } else {
            Err(CoreError::NotFound)
        }
    }
}

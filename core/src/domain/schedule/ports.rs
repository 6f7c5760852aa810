use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    schedule::{
        entities::{PricedSchedule, Schedule, ScheduleDetails},
        filter::ScheduleFilter,
        sort::ScheduleOrder,
        value_objects::{CreateScheduleInput, SearchCriteria, UpdateScheduleInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ScheduleService: Send + Sync {
    fn search_schedules(
        &self,
        criteria: SearchCriteria,
    ) -> impl Future<Output = Result<Vec<PricedSchedule>, CoreError>> + Send;

    fn get_schedule(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<ScheduleDetails, CoreError>> + Send;

    fn create_schedule(
        &self,
        input: CreateScheduleInput,
    ) -> impl Future<Output = Result<Schedule, CoreError>> + Send;

    fn update_schedule(
        &self,
        schedule_id: i32,
        input: UpdateScheduleInput,
    ) -> impl Future<Output = Result<Schedule, CoreError>> + Send;

    fn toggle_schedule_status(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<Schedule, CoreError>> + Send;

    fn delete_schedule(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ScheduleRepository: Send + Sync {
    /// Results come back in `order`, with route, airports and aircraft resolved.
    fn search(
        &self,
        filter: ScheduleFilter,
        order: ScheduleOrder,
    ) -> impl Future<Output = Result<Vec<ScheduleDetails>, CoreError>> + Send;

    fn get_details_by_id(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<Option<ScheduleDetails>, CoreError>> + Send;

    fn get_by_id(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<Option<Schedule>, CoreError>> + Send;

    fn create_schedule(
        &self,
        input: CreateScheduleInput,
    ) -> impl Future<Output = Result<Schedule, CoreError>> + Send;

    /// Fails with `NotFound` when the row no longer exists.
    fn update_schedule(
        &self,
        schedule: Schedule,
    ) -> impl Future<Output = Result<Schedule, CoreError>> + Send;

    /// Flips `confirmed` in a single statement. `None` when the row is absent.
    fn toggle_confirmed(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<Option<Schedule>, CoreError>> + Send;

    /// Returns whether a row was removed.
    fn delete_schedule(
        &self,
        schedule_id: i32,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}

use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::common::entities::app_errors::CoreError;
use aerodesk_core::domain::schedule::entities::Schedule;
use aerodesk_core::domain::schedule::ports::ScheduleService;
use axum::extract::{Path, State};

#[utoipa::path(
    patch,
    path = "/{schedule_id}/status",
    tag = "schedule",
    summary = "Toggle schedule status",
    description = "Flips the confirmed flag of the schedule and returns the updated record.",
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID"),
    ),
    responses(
        (status = 200, body = Schedule),
        (status = 404, body = ApiErrorResponse, description = "Schedule not found")
    )
)]
pub async fn toggle_schedule_status(
    Path(schedule_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<Schedule>, ApiError> {
    let schedule = state
        .service
        .toggle_schedule_status(schedule_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Schedule not found".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(schedule))
}

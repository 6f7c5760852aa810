use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::common::entities::app_errors::CoreError;
use aerodesk_core::domain::schedule::entities::ScheduleDetails;
use aerodesk_core::domain::schedule::ports::ScheduleService;
use axum::extract::{Path, State};

#[utoipa::path(
    get,
    path = "/{schedule_id}",
    tag = "schedule",
    summary = "Get schedule",
    description = "Returns one schedule with its route, airports and aircraft.",
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID"),
    ),
    responses(
        (status = 200, body = ScheduleDetails),
        (status = 404, body = ApiErrorResponse, description = "Schedule not found")
    )
)]
pub async fn get_schedule(
    Path(schedule_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<ScheduleDetails>, ApiError> {
    let schedule = state
        .service
        .get_schedule(schedule_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Schedule not found".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(schedule))
}

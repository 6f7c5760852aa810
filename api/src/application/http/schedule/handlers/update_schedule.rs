use crate::application::http::schedule::validators::UpdateScheduleValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::common::entities::app_errors::CoreError;
use aerodesk_core::domain::schedule::entities::Schedule;
use aerodesk_core::domain::schedule::ports::ScheduleService;
use axum::extract::{Path, State};

#[utoipa::path(
    patch,
    path = "/{schedule_id}",
    tag = "schedule",
    summary = "Update schedule",
    description = "Replaces the provided fields and keeps the others.",
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID"),
    ),
    request_body = UpdateScheduleValidator,
    responses(
        (status = 200, body = Schedule),
        (status = 400, body = ApiErrorResponse, description = "Invalid payload"),
        (status = 404, body = ApiErrorResponse, description = "Schedule not found")
    )
)]
pub async fn update_schedule(
    Path(schedule_id): Path<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateScheduleValidator>,
) -> Result<Response<Schedule>, ApiError> {
    let schedule = state
        .service
        .update_schedule(schedule_id, payload.into())
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Schedule not found".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(schedule))
}

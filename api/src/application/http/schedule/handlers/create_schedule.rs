use crate::application::http::schedule::validators::CreateScheduleValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::schedule::entities::Schedule;
use aerodesk_core::domain::schedule::ports::ScheduleService;
use axum::extract::State;

#[utoipa::path(
    post,
    path = "",
    tag = "schedule",
    summary = "Create schedule",
    description = "Creates a schedule for an existing route and aircraft.",
    request_body = CreateScheduleValidator,
    responses(
        (status = 201, body = Schedule, description = "Schedule created"),
        (status = 400, body = ApiErrorResponse, description = "Invalid payload")
    )
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateScheduleValidator>,
) -> Result<Response<Schedule>, ApiError> {
    let schedule = state
        .service
        .create_schedule(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(schedule))
}

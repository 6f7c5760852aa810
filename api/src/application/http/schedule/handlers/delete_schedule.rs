use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::common::entities::app_errors::CoreError;
use aerodesk_core::domain::schedule::ports::ScheduleService;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteScheduleResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{schedule_id}",
    tag = "schedule",
    summary = "Delete schedule",
    params(
        ("schedule_id" = i32, Path, description = "Schedule ID"),
    ),
    responses(
        (status = 200, body = DeleteScheduleResponse),
        (status = 404, body = ApiErrorResponse, description = "Schedule not found")
    )
)]
pub async fn delete_schedule(
    Path(schedule_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<DeleteScheduleResponse>, ApiError> {
    state
        .service
        .delete_schedule(schedule_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Schedule not found".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(DeleteScheduleResponse {
        message: "Schedule deleted successfully".to_string(),
    }))
}

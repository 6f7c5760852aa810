use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::common::entities::app_errors::CoreError;
use aerodesk_core::domain::user::entities::User;
use aerodesk_core::domain::user::ports::UserService;
use axum::extract::{Path, State};

#[utoipa::path(
    get,
    path = "/{user_id}",
    tag = "user",
    summary = "Get user",
    params(
        ("user_id" = i32, Path, description = "User ID"),
    ),
    responses(
        (status = 200, body = User),
        (status = 404, body = ApiErrorResponse, description = "User not found")
    )
)]
pub async fn get_user(
    Path(user_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<User>, ApiError> {
    let user = state.service.get_user(user_id).await.map_err(|e| match e {
        CoreError::NotFound => ApiError::NotFound("User not found".to_string()),
        e => ApiError::from(e),
    })?;

    Ok(Response::OK(user))
}

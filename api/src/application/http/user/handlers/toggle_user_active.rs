use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use crate::application::http::user::validators::ToggleUserActiveValidator;
use aerodesk_core::domain::common::entities::app_errors::CoreError;
use aerodesk_core::domain::user::entities::User;
use aerodesk_core::domain::user::ports::UserService;
use axum::extract::State;

#[utoipa::path(
    put,
    path = "",
    tag = "user",
    summary = "Toggle user activity",
    description = "Enables a disabled account or disables an enabled one.",
    request_body = ToggleUserActiveValidator,
    responses(
        (status = 200, body = User),
        (status = 400, body = ApiErrorResponse, description = "Invalid payload"),
        (status = 404, body = ApiErrorResponse, description = "User not found")
    )
)]
pub async fn toggle_user_active(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<ToggleUserActiveValidator>,
) -> Result<Response<User>, ApiError> {
    let user = state
        .service
        .toggle_user_active(payload.user_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("User not found".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(user))
}

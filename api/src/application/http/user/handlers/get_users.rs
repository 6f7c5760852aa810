use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::user::entities::UserSummary;
use aerodesk_core::domain::user::ports::UserService;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/list",
    tag = "user",
    summary = "List users",
    responses(
        (status = 200, body = Vec<UserSummary>)
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
) -> Result<Response<Vec<UserSummary>>, ApiError> {
    let users = state.service.get_users().await.map_err(ApiError::from)?;

    Ok(Response::OK(users))
}

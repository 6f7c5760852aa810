use super::handlers::{
    get_user::{__path_get_user, get_user},
    get_users::{__path_get_users, get_users},
    toggle_user_active::{__path_toggle_user_active, toggle_user_active},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_users, get_user, toggle_user_active))]
pub struct UserApiDoc;

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/users", state.args.server.root_path),
            put(toggle_user_active),
        )
        .route(
            &format!("{}/users/list", state.args.server.root_path),
            get(get_users),
        )
        .route(
            &format!("{}/users/{{user_id}}", state.args.server.root_path),
            get(get_user),
        )
}

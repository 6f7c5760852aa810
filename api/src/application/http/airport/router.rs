use super::handlers::get_airports::{__path_get_airports, get_airports};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_airports))]
pub struct AirportApiDoc;

pub fn airport_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/airports", state.args.server.root_path),
        get(get_airports),
    )
}

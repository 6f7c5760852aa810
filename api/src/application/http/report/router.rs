use super::handlers::get_service_report::{__path_get_service_report, get_service_report};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_service_report))]
pub struct ReportApiDoc;

pub fn report_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/report/services", state.args.server.root_path),
        get(get_service_report),
    )
}

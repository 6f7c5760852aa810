use super::handlers::{
    get_stats_by_field::{__path_get_stats_by_field, get_stats_by_field},
    get_survey_stats::{__path_get_survey_stats, get_survey_stats},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_survey_stats, get_stats_by_field))]
pub struct SurveyApiDoc;

pub fn survey_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/survey/stats", state.args.server.root_path),
            get(get_survey_stats),
        )
        .route(
            &format!("{}/survey/stats/{{field}}", state.args.server.root_path),
            get(get_stats_by_field),
        )
}

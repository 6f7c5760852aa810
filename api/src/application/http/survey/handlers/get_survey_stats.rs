use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::survey::ports::SurveyService;
use aerodesk_core::domain::survey::value_objects::SurveyStats;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "/stats",
    tag = "survey",
    summary = "Survey statistics",
    description = "Answer totals grouped by gender, age, cabin type, departure and arrival.",
    responses(
        (status = 200, body = SurveyStats)
    )
)]
pub async fn get_survey_stats(State(state): State<AppState>) -> Result<Response<SurveyStats>, ApiError> {
    let stats = state
        .service
        .get_survey_stats()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(stats))
}

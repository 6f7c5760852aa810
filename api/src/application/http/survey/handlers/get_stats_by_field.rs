use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::survey::ports::SurveyService;
use aerodesk_core::domain::survey::value_objects::{SurveyField, SurveyGroupStats};
use axum::extract::{Path, State};

#[utoipa::path(
    get,
    path = "/stats/{field}",
    tag = "survey",
    summary = "Survey statistics for one field",
    params(
        ("field" = String, Path, description = "gender, age, cabinType, departure or arrival"),
    ),
    responses(
        (status = 200, body = Vec<SurveyGroupStats>),
        (status = 400, body = ApiErrorResponse, description = "Unknown field")
    )
)]
pub async fn get_stats_by_field(
    Path(field): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<SurveyGroupStats>>, ApiError> {
    let field = field.parse::<SurveyField>()?;

    let groups = state
        .service
        .get_stats_by_field(field)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(groups))
}

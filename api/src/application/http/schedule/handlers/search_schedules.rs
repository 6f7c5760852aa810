use crate::application::http::schedule::validators::SearchSchedulesQuery;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::schedule::entities::PricedSchedule;
use aerodesk_core::domain::schedule::ports::ScheduleService;
use axum::extract::{Query, State};

#[utoipa::path(
    get,
    path = "",
    tag = "schedule",
    summary = "Search schedules",
    description = "Filters schedules by route, date and flight number, sorts them and prices each one for the requested cabin class.",
    params(SearchSchedulesQuery),
    responses(
        (status = 200, body = Vec<PricedSchedule>),
        (status = 400, body = ApiErrorResponse, description = "Invalid search parameters")
    )
)]
pub async fn search_schedules(
    State(state): State<AppState>,
    Query(query): Query<SearchSchedulesQuery>,
) -> Result<Response<Vec<PricedSchedule>>, ApiError> {
    let criteria = query.into_criteria()?;

    let schedules = state
        .service
        .search_schedules(criteria)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(schedules))
}

use crate::application::http::schedule::validators::parse_date;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::report::ports::ServiceReportService;
use aerodesk_core::domain::report::value_objects::{ServiceReportFilter, ServiceReportLine};
use axum::extract::{Query, State};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ServiceReportQuery {
    pub flight_number: Option<String>,
    /// ISO date; defaults to every flight from today on.
    pub flight_date: Option<String>,
}

#[utoipa::path(
    get,
    path = "/services",
    tag = "report",
    summary = "Amenity service report",
    description = "Lists amenities purchased on confirmed tickets, per flight.",
    params(ServiceReportQuery),
    responses(
        (status = 200, body = Vec<ServiceReportLine>),
        (status = 400, body = ApiErrorResponse, description = "Invalid flight date")
    )
)]
pub async fn get_service_report(
    State(state): State<AppState>,
    Query(query): Query<ServiceReportQuery>,
) -> Result<Response<Vec<ServiceReportLine>>, ApiError> {
    let flight_date = query
        .flight_date
        .as_deref()
        .filter(|value| !value.trim().is_empty())
        .map(|value| parse_date("flightDate", value))
        .transpose()?;

    let lines = state
        .service
        .generate_service_report(ServiceReportFilter {
            flight_number: query.flight_number,
            flight_date,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(lines))
}

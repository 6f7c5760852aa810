use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::airport::entities::Airport;
use aerodesk_core::domain::airport::ports::AirportService;
use axum::extract::State;

#[utoipa::path(
    get,
    path = "",
    tag = "airport",
    summary = "List airports",
    description = "Returns every airport ordered by IATA code.",
    responses(
        (status = 200, body = Vec<Airport>)
    )
)]
pub async fn get_airports(State(state): State<AppState>) -> Result<Response<Vec<Airport>>, ApiError> {
    let airports = state
        .service
        .get_airports()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(airports))
}

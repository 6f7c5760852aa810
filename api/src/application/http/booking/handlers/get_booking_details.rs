use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::booking::entities::BookedFlight;
use aerodesk_core::domain::booking::ports::BookingService;
use aerodesk_core::domain::common::entities::app_errors::CoreError;
use axum::extract::{Path, State};

#[utoipa::path(
    get,
    path = "/{booking_reference}/details",
    tag = "booking",
    summary = "Get booking details",
    description = "Lists the confirmed flights of a booking that depart in 24 hours or more.",
    params(
        ("booking_reference" = String, Path, description = "Booking reference"),
    ),
    responses(
        (status = 200, body = Vec<BookedFlight>),
        (status = 404, body = ApiErrorResponse, description = "No upcoming flights for this booking")
    )
)]
pub async fn get_booking_details(
    Path(booking_reference): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Vec<BookedFlight>>, ApiError> {
    let flights = state
        .service
        .get_booking_details(booking_reference)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound(
                "No booking found or all flights are within 24 hours".to_string(),
            ),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(flights))
}

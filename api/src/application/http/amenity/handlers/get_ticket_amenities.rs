use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::amenity::entities::TicketAmenity;
use aerodesk_core::domain::amenity::ports::AmenityService;
use aerodesk_core::domain::common::entities::app_errors::CoreError;
use axum::extract::{Path, State};

#[utoipa::path(
    get,
    path = "/{ticket_id}",
    tag = "amenity",
    summary = "Get ticket amenities",
    description = "Lists every amenity with the ticket's purchase flag and price.",
    params(
        ("ticket_id" = i32, Path, description = "Ticket ID"),
    ),
    responses(
        (status = 200, body = Vec<TicketAmenity>),
        (status = 404, body = ApiErrorResponse, description = "Ticket not found")
    )
)]
pub async fn get_ticket_amenities(
    Path(ticket_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Response<Vec<TicketAmenity>>, ApiError> {
    let amenities = state
        .service
        .get_ticket_amenities(ticket_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Ticket not found.".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(amenities))
}

use crate::application::http::amenity::validators::PurchaseAmenitiesValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use aerodesk_core::domain::amenity::entities::TicketAmenity;
use aerodesk_core::domain::amenity::ports::AmenityService;
use aerodesk_core::domain::common::entities::app_errors::CoreError;
use axum::extract::{Path, State};

#[utoipa::path(
    put,
    path = "/{ticket_id}/amenities",
    tag = "amenity",
    summary = "Purchase amenities",
    description = "Replaces the amenities held by the ticket with the selection.",
    params(
        ("ticket_id" = i32, Path, description = "Ticket ID"),
    ),
    request_body = PurchaseAmenitiesValidator,
    responses(
        (status = 200, body = Vec<TicketAmenity>),
        (status = 400, body = ApiErrorResponse, description = "Empty or unknown selection"),
        (status = 404, body = ApiErrorResponse, description = "Ticket not found")
    )
)]
pub async fn purchase_amenities(
    Path(ticket_id): Path<i32>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<PurchaseAmenitiesValidator>,
) -> Result<Response<Vec<TicketAmenity>>, ApiError> {
    let amenities = state
        .service
        .purchase_amenities(ticket_id, payload.selected_amenities)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => ApiError::NotFound("Ticket not found.".to_string()),
            e => ApiError::from(e),
        })?;

    Ok(Response::OK(amenities))
}

use super::handlers::get_booking_details::{__path_get_booking_details, get_booking_details};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_booking_details))]
pub struct BookingApiDoc;

pub fn booking_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!(
            "{}/booking/{{booking_reference}}/details",
            state.args.server.root_path
        ),
        get(get_booking_details),
    )
}

use super::handlers::{
    get_ticket_amenities::{__path_get_ticket_amenities, get_ticket_amenities},
    purchase_amenities::{__path_purchase_amenities, purchase_amenities},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_ticket_amenities))]
pub struct AmenityApiDoc;

#[derive(OpenApi)]
#[openapi(paths(purchase_amenities))]
pub struct PurchaseApiDoc;

pub fn amenity_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/amenities/{{ticket_id}}", state.args.server.root_path),
            get(get_ticket_amenities),
        )
        .route(
            &format!(
                "{}/purchase/{{ticket_id}}/amenities",
                state.args.server.root_path
            ),
            put(purchase_amenities),
        )
}

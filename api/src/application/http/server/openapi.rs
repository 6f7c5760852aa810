use crate::application::http::{
    airport::router::AirportApiDoc,
    amenity::router::{AmenityApiDoc, PurchaseApiDoc},
    booking::router::BookingApiDoc,
    health::router::HealthApiDoc,
    report::router::ReportApiDoc,
    schedule::router::ScheduleApiDoc,
    survey::router::SurveyApiDoc,
    user::router::UserApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aerodesk API"
    ),
    nest(
        (path = "/schedules", api = ScheduleApiDoc),
        (path = "/airports", api = AirportApiDoc),
        (path = "/booking", api = BookingApiDoc),
        (path = "/amenities", api = AmenityApiDoc),
        (path = "/purchase", api = PurchaseApiDoc),
        (path = "/report", api = ReportApiDoc),
        (path = "/survey", api = SurveyApiDoc),
        (path = "/users", api = UserApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

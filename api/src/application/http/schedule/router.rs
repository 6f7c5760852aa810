use super::handlers::{
    create_schedule::{__path_create_schedule, create_schedule},
    delete_schedule::{__path_delete_schedule, delete_schedule},
    get_schedule::{__path_get_schedule, get_schedule},
    search_schedules::{__path_search_schedules, search_schedules},
    toggle_schedule_status::{__path_toggle_schedule_status, toggle_schedule_status},
    update_schedule::{__path_update_schedule, update_schedule},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    search_schedules,
    get_schedule,
    create_schedule,
    update_schedule,
    toggle_schedule_status,
    delete_schedule
))]
pub struct ScheduleApiDoc;

pub fn schedule_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/schedules", state.args.server.root_path),
            get(search_schedules).post(create_schedule),
        )
        .route(
            &format!("{}/schedules/{{schedule_id}}", state.args.server.root_path),
            get(get_schedule)
                .patch(update_schedule)
                .delete(delete_schedule),
        )
        .route(
            &format!(
                "{}/schedules/{{schedule_id}}/status",
                state.args.server.root_path
            ),
            patch(toggle_schedule_status),
        )
}

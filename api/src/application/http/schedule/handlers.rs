pub mod create_schedule;
pub mod delete_schedule;
pub mod get_schedule;
pub mod search_schedules;
pub mod toggle_schedule_status;
pub mod update_schedule;

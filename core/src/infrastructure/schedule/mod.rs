pub mod mappers;
pub mod repositories;

pub use repositories::schedule_repository::PostgresScheduleRepository;

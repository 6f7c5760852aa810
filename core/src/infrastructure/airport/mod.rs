pub mod mappers;
pub mod repository;

pub use repository::PostgresAirportRepository;

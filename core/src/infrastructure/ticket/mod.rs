pub mod repository;

pub use repository::PostgresTicketRepository;

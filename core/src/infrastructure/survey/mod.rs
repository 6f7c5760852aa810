pub mod repository;

pub use repository::PostgresSurveyRepository;

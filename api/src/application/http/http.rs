pub mod airport;
pub mod booking;
pub mod health;
pub mod report;
pub mod schedule;
pub mod server;
pub mod survey;

pub mod airport;
pub mod amenity;
pub mod booking;
pub mod health;
pub mod report;
pub mod schedule;
pub mod server;
pub mod survey;
pub mod user;

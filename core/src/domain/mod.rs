pub mod airport;
pub mod amenity;
pub mod booking;
pub mod common;
pub mod health;
pub mod report;
pub mod schedule;
pub mod survey;
pub mod user;

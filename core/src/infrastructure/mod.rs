pub mod airport;
pub mod db;
pub mod health;
pub mod schedule;
pub mod survey;
pub mod ticket;
pub mod user;

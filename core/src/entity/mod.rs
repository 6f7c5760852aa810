//! SeaORM entities for the airline schema.

pub mod aircrafts;
pub mod airports;
pub mod amenities;
pub mod amenities_tickets;
pub mod routes;
pub mod schedules;
pub mod survey;
pub mod tickets;
pub mod users;

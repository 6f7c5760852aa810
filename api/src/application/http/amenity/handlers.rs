pub mod get_ticket_amenities;
pub mod purchase_amenities;

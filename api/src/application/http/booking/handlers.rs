pub mod get_booking_details;

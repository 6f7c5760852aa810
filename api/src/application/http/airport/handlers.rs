pub mod get_airports;

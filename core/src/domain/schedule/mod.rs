pub mod entities;
pub mod filter;
pub mod ports;
pub mod pricing;
pub mod services;
pub mod sort;
pub mod value_objects;

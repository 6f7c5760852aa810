use std::future::Future;

use crate::domain::{airport::entities::Airport, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait AirportService: Send + Sync {
    fn get_airports(&self) -> impl Future<Output = Result<Vec<Airport>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AirportRepository: Send + Sync {
    fn fetch_airports(&self) -> impl Future<Output = Result<Vec<Airport>, CoreError>> + Send;
}

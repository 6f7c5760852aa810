use std::future::Future;

use chrono::NaiveDateTime;

use crate::domain::{booking::entities::BookedFlight, common::entities::app_errors::CoreError};

#[cfg_attr(test, mockall::automock)]
pub trait BookingService: Send + Sync {
    fn get_booking_details(
        &self,
        booking_reference: String,
    ) -> impl Future<Output = Result<Vec<BookedFlight>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait BookingRepository: Send + Sync {
    /// Confirmed tickets of the booking departing at or after `departing_from`,
    /// earliest first.
    fn fetch_upcoming_flights(
        &self,
        booking_reference: String,
        departing_from: NaiveDateTime,
    ) -> impl Future<Output = Result<Vec<BookedFlight>, CoreError>> + Send;
}

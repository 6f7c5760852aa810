use std::future::Future;

use crate::domain::{
    amenity::entities::{AmenityPurchase, TicketAmenity},
    common::entities::app_errors::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AmenityService: Send + Sync {
    fn get_ticket_amenities(
        &self,
        ticket_id: i32,
    ) -> impl Future<Output = Result<Vec<TicketAmenity>, CoreError>> + Send;

    /// Replaces the amenities bought for the ticket with `amenity_ids`.
    fn purchase_amenities(
        &self,
        ticket_id: i32,
        amenity_ids: Vec<i32>,
    ) -> impl Future<Output = Result<Vec<TicketAmenity>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AmenityRepository: Send + Sync {
    fn ticket_exists(
        &self,
        ticket_id: i32,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Every amenity, flagged with whether the ticket already holds it.
    fn fetch_ticket_amenities(
        &self,
        ticket_id: i32,
    ) -> impl Future<Output = Result<Vec<TicketAmenity>, CoreError>> + Send;

    /// Atomically swaps the ticket's purchases for `purchases`.
    fn replace_ticket_amenities(
        &self,
        ticket_id: i32,
        purchases: Vec<AmenityPurchase>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

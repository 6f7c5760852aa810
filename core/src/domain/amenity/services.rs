use tracing::{info, instrument};

use crate::domain::{
    airport::ports::AirportRepository,
    amenity::{
        entities::{AmenityPurchase, TicketAmenity},
        ports::{AmenityRepository, AmenityService},
    },
    booking::ports::BookingRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    report::ports::ServiceReportRepository,
    schedule::ports::ScheduleRepository,
    survey::ports::SurveyRepository,
    user::ports::UserRepository,
};

impl<S, A, B, AM, RP, SV, U, HC> AmenityService for Service<S, A, B, AM, RP, SV, U, HC>
where
    S: ScheduleRepository,
    A: AirportRepository,
    B: BookingRepository,
    AM: AmenityRepository,
    RP: ServiceReportRepository,
    SV: SurveyRepository,
    U: UserRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_ticket_amenities(&self, ticket_id: i32) -> Result<Vec<TicketAmenity>, CoreError> {
        if !self.amenity_repository.ticket_exists(ticket_id).await? {
            return Err(CoreError::NotFound);
        }

        self.amenity_repository
            .fetch_ticket_amenities(ticket_id)
            .await
    }

    #[instrument(skip(self))]
    async fn purchase_amenities(
        &self,
        ticket_id: i32,
        mut amenity_ids: Vec<i32>,
    ) -> Result<Vec<TicketAmenity>, CoreError> {
        if amenity_ids.is_empty() {
            return Err(CoreError::validation("no amenities selected"));
        }
        amenity_ids.sort_unstable();
        amenity_ids.dedup();

        let offered = self.get_ticket_amenities(ticket_id).await?;

        // Amenities already held keep the price paid; new ones take the list price.
        let purchases = amenity_ids
            .iter()
            .map(|id| {
                offered
                    .iter()
                    .find(|amenity| amenity.id == *id)
                    .map(|amenity| AmenityPurchase {
                        amenity_id: amenity.id,
                        price: amenity.price,
                    })
                    .ok_or_else(|| CoreError::validation(format!("unknown amenity {id}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.amenity_repository
            .replace_ticket_amenities(ticket_id, purchases)
            .await?;
        info!(ticket_id, amenities = ?amenity_ids, "ticket amenities purchased");

        self.amenity_repository
            .fetch_ticket_amenities(ticket_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Mutex};

    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{
        airport::ports::MockAirportRepository, booking::ports::MockBookingRepository,
        health::ports::MockHealthCheckRepository, report::ports::MockServiceReportRepository,
        schedule::ports::MockScheduleRepository, survey::ports::MockSurveyRepository,
        user::ports::MockUserRepository,
    };

    /// Catalogue of `(id, service, price)` and the purchases per ticket.
    struct InMemoryAmenities {
        catalogue: Vec<(i32, &'static str, i64)>,
        tickets: Vec<i32>,
        purchases: Mutex<HashMap<i32, Vec<AmenityPurchase>>>,
    }

    impl AmenityRepository for InMemoryAmenities {
        async fn ticket_exists(&self, ticket_id: i32) -> Result<bool, CoreError> {
            Ok(self.tickets.contains(&ticket_id))
        }

        async fn fetch_ticket_amenities(
            &self,
            ticket_id: i32,
        ) -> Result<Vec<TicketAmenity>, CoreError> {
            let purchases = self.purchases.lock().unwrap();
            let held = purchases.get(&ticket_id).cloned().unwrap_or_default();

            Ok(self
                .catalogue
                .iter()
                .map(|(id, service, price)| {
                    let bought = held.iter().find(|p| p.amenity_id == *id);
                    TicketAmenity {
                        id: *id,
                        service: service.to_string(),
                        price: bought.map_or(Decimal::new(*price, 0), |p| p.price),
                        purchased: bought.is_some(),
                    }
                })
                .collect())
        }

        async fn replace_ticket_amenities(
            &self,
            ticket_id: i32,
            purchases: Vec<AmenityPurchase>,
        ) -> Result<(), CoreError> {
            self.purchases.lock().unwrap().insert(ticket_id, purchases);
            Ok(())
        }
    }

    type AmenityTestService = Service<
        MockScheduleRepository,
        MockAirportRepository,
        MockBookingRepository,
        InMemoryAmenities,
        MockServiceReportRepository,
        MockSurveyRepository,
        MockUserRepository,
        MockHealthCheckRepository,
    >;

    fn service(held: Vec<AmenityPurchase>) -> AmenityTestService {
        Service::new(
            MockScheduleRepository::new(),
            MockAirportRepository::new(),
            MockBookingRepository::new(),
            InMemoryAmenities {
                catalogue: vec![
                    (1, "Soft drinks", 0),
                    (2, "Wi-Fi 50 mb", 10),
                    (3, "Extra blanket", 5),
                ],
                tickets: vec![7],
                purchases: Mutex::new(HashMap::from([(7, held)])),
            },
            MockServiceReportRepository::new(),
            MockSurveyRepository::new(),
            MockUserRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    fn purchased(amenities: &[TicketAmenity]) -> Vec<i32> {
        amenities
            .iter()
            .filter(|a| a.purchased)
            .map(|a| a.id)
            .collect()
    }

    #[tokio::test]
    async fn lists_every_amenity_with_purchase_flag() {
        let amenities = service(vec![AmenityPurchase {
            amenity_id: 2,
            price: Decimal::new(8, 0),
        }])
        .get_ticket_amenities(7)
        .await
        .unwrap();

        assert_eq!(amenities.len(), 3);
        assert_eq!(purchased(&amenities), vec![2]);
        assert_eq!(amenities[1].price, Decimal::new(8, 0));
    }

    #[tokio::test]
    async fn unknown_ticket_is_not_found() {
        assert_eq!(
            service(Vec::new()).get_ticket_amenities(99).await,
            Err(CoreError::NotFound)
        );
        assert_eq!(
            service(Vec::new()).purchase_amenities(99, vec![1]).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn purchase_replaces_the_selection() {
        let service = service(vec![AmenityPurchase {
            amenity_id: 2,
            price: Decimal::new(8, 0),
        }]);

        let amenities = service.purchase_amenities(7, vec![3, 2, 3]).await.unwrap();

        assert_eq!(purchased(&amenities), vec![2, 3]);
        assert_eq!(amenities[1].price, Decimal::new(8, 0));
        assert_eq!(amenities[2].price, Decimal::new(5, 0));

        let amenities = service.purchase_amenities(7, vec![1]).await.unwrap();
        assert_eq!(purchased(&amenities), vec![1]);
    }

    #[tokio::test]
    async fn empty_or_unknown_selection_is_rejected() {
        let service = service(Vec::new());

        assert!(matches!(
            service.purchase_amenities(7, Vec::new()).await,
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            service.purchase_amenities(7, vec![1, 4]).await,
            Err(CoreError::Validation(_))
        ));
        assert!(purchased(&service.get_ticket_amenities(7).await.unwrap()).is_empty());
    }
}

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, QueryFilter, Statement, TransactionTrait, Value,
};
use tracing::error;

use crate::{
    domain::{
        amenity::{
            entities::{AmenityPurchase, TicketAmenity},
            ports::AmenityRepository,
        },
        booking::{entities::BookedFlight, ports::BookingRepository},
        common::entities::app_errors::CoreError,
        report::{
            ports::ServiceReportRepository,
            value_objects::{ReportDates, ServiceReportLine},
        },
    },
    entity::{amenities_tickets, tickets},
};

/// Tickets and the amenities bought for them.
#[derive(Debug, Clone)]
pub struct PostgresTicketRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresTicketRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct BookedFlightRow {
    flight_number: String,
    flight_date: NaiveDate,
    flight_time: NaiveTime,
    departure: String,
    arrival: String,
}

impl From<BookedFlightRow> for BookedFlight {
    fn from(row: BookedFlightRow) -> Self {
        Self {
            flight_number: row.flight_number,
            flight_date: row.flight_date,
            flight_time: row.flight_time,
            departure: row.departure,
            arrival: row.arrival,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct ServiceLineRow {
    flight_number: String,
    service: String,
    price: Decimal,
}

impl From<ServiceLineRow> for ServiceReportLine {
    fn from(row: ServiceLineRow) -> Self {
        Self {
            flight_number: row.flight_number,
            service: row.service,
            price: row.price,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct TicketAmenityRow {
    id: i32,
    service: String,
    price: Decimal,
    purchased: bool,
}

impl From<TicketAmenityRow> for TicketAmenity {
    fn from(row: TicketAmenityRow) -> Self {
        Self {
            id: row.id,
            service: row.service,
            price: row.price,
            purchased: row.purchased,
        }
    }
}

/// References are stored upper-cased but matched regardless of case.
fn upcoming_flights_statement(
    booking_reference: String,
    departing_from: NaiveDateTime,
) -> Statement {
    Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        r#"
        SELECT
          s.flight_number,
          s.date AS flight_date,
          s.time AS flight_time,
          dep.name AS departure,
          arr.name AS arrival
        FROM tickets t
        INNER JOIN schedules s ON s.id = t.schedule_id
        INNER JOIN routes r ON r.id = s.route_id
        INNER JOIN airports dep ON dep.id = r.departure_airport_id
        INNER JOIN airports arr ON arr.id = r.arrival_airport_id
        WHERE UPPER(t.booking_reference) = UPPER($1)
          AND t.confirmed = TRUE
          AND (s.date + s.time) >= $2
        ORDER BY s.date, s.time, s.flight_number
        "#,
        [booking_reference.into(), departing_from.into()],
    )
}

impl BookingRepository for PostgresTicketRepository {
    async fn fetch_upcoming_flights(
        &self,
        booking_reference: String,
        departing_from: NaiveDateTime,
    ) -> Result<Vec<BookedFlight>, CoreError> {
        let stmt = upcoming_flights_statement(booking_reference, departing_from);

        let rows = BookedFlightRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch booking flights: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(rows.into_iter().map(BookedFlight::from).collect())
    }
}

impl ServiceReportRepository for PostgresTicketRepository {
    async fn fetch_service_lines(
        &self,
        flight_number: Option<String>,
        dates: ReportDates,
    ) -> Result<Vec<ServiceReportLine>, CoreError> {
        let (date_clause, date) = match dates {
            ReportDates::On(date) => ("s.date = $1", date),
            ReportDates::From(date) => ("s.date >= $1", date),
        };

        let mut values: Vec<Value> = vec![date.into()];
        let flight_clause = match flight_number {
            Some(number) => {
                values.push(number.into());
                "AND s.flight_number = $2"
            }
            None => "",
        };

        let sql = format!(
            r#"
            SELECT
              s.flight_number,
              a.service,
              amt.price
            FROM amenities_tickets amt
            INNER JOIN amenities a ON a.id = amt.amenity_id
            INNER JOIN tickets t ON t.id = amt.ticket_id
            INNER JOIN schedules s ON s.id = t.schedule_id
            WHERE t.confirmed = TRUE
              AND {date_clause}
              {flight_clause}
            ORDER BY s.date, s.flight_number, a.service
            "#
        );

        let rows = ServiceLineRow::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            sql,
            values,
        ))
        .all(self.db.as_ref())
        .await
        .map_err(|e| {
            error!("Failed to fetch amenity service lines: {}", e);
            CoreError::Persistence(e.to_string())
        })?;

        Ok(rows.into_iter().map(ServiceReportLine::from).collect())
    }
}

impl AmenityRepository for PostgresTicketRepository {
    async fn ticket_exists(&self, ticket_id: i32) -> Result<bool, CoreError> {
        let ticket = tickets::Entity::find_by_id(ticket_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get ticket: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(ticket.is_some())
    }

    async fn fetch_ticket_amenities(
        &self,
        ticket_id: i32,
    ) -> Result<Vec<TicketAmenity>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              a.id,
              a.service,
              COALESCE(amt.price, a.price) AS price,
              amt.ticket_id IS NOT NULL AS purchased
            FROM amenities a
            LEFT JOIN amenities_tickets amt ON amt.amenity_id = a.id AND amt.ticket_id = $1
            ORDER BY a.id
            "#,
            [ticket_id.into()],
        );

        let rows = TicketAmenityRow::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch ticket amenities: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(rows.into_iter().map(TicketAmenity::from).collect())
    }

    async fn replace_ticket_amenities(
        &self,
        ticket_id: i32,
        purchases: Vec<AmenityPurchase>,
    ) -> Result<(), CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to start amenity purchase: {}", e);
            CoreError::Persistence(e.to_string())
        })?;

        amenities_tickets::Entity::delete_many()
            .filter(amenities_tickets::Column::TicketId.eq(ticket_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to clear ticket amenities: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        if !purchases.is_empty() {
            let models = purchases
                .into_iter()
                .map(|purchase| amenities_tickets::ActiveModel {
                    amenity_id: Set(purchase.amenity_id),
                    ticket_id: Set(ticket_id),
                    price: Set(purchase.price),
                });

            amenities_tickets::Entity::insert_many(models)
                .exec_without_returning(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to store ticket amenities: {}", e);
                    CoreError::Persistence(e.to_string())
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit amenity purchase: {}", e);
            CoreError::Persistence(e.to_string())
        })
    }
}

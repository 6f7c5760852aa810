use std::sync::Arc;

use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;

use crate::{
    domain::{
        airport::{entities::Airport, ports::AirportRepository},
        common::entities::app_errors::CoreError,
    },
    entity::airports::{Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresAirportRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresAirportRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl AirportRepository for PostgresAirportRepository {
    async fn fetch_airports(&self) -> Result<Vec<Airport>, CoreError> {
        let airports = Entity::find()
            .order_by_asc(Column::IataCode)
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to fetch airports: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(airports.into_iter().map(Airport::from).collect())
    }
}

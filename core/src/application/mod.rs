use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    domain::common::{AerodeskConfig, services::Service},
    infrastructure::{
        airport::PostgresAirportRepository,
        db::postgres::{Postgres, PostgresConfig},
        health::PostgresHealthCheckRepository,
        schedule::PostgresScheduleRepository,
        survey::PostgresSurveyRepository,
        ticket::PostgresTicketRepository,
        user::PostgresUserRepository,
    },
};

pub type AerodeskService = Service<
    PostgresScheduleRepository,
    PostgresAirportRepository,
    PostgresTicketRepository,
    PostgresTicketRepository,
    PostgresTicketRepository,
    PostgresSurveyRepository,
    PostgresUserRepository,
    PostgresHealthCheckRepository,
>;

/// Connects to Postgres, applies migrations and wires every repository.
pub async fn create_service(config: AerodeskConfig) -> Result<AerodeskService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    Ok(service_from_shared(postgres.get_db()))
}

/// Wires the service over an existing connection. Migrations are not run.
pub fn service_from_connection(db: DatabaseConnection) -> AerodeskService {
    service_from_shared(Arc::new(db))
}

fn service_from_shared(db: Arc<DatabaseConnection>) -> AerodeskService {
    Service::new(
        PostgresScheduleRepository::new(Arc::clone(&db)),
        PostgresAirportRepository::new(Arc::clone(&db)),
        PostgresTicketRepository::new(Arc::clone(&db)),
        PostgresTicketRepository::new(Arc::clone(&db)),
        PostgresTicketRepository::new(Arc::clone(&db)),
        PostgresSurveyRepository::new(Arc::clone(&db)),
        PostgresUserRepository::new(Arc::clone(&db)),
        PostgresHealthCheckRepository::new(db),
    )
}

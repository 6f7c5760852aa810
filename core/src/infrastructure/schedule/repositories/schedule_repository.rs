use std::{
    collections::{BTreeSet, HashMap},
    sync::Arc,
};

use sea_orm::{
    ActiveValue::{NotSet, Set},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Select,
    sea_query::{Expr, Query, SelectStatement, SimpleExpr},
};
use tracing::error;

use crate::{
    domain::{
        airport::entities::Airport,
        common::entities::app_errors::CoreError,
        schedule::{
            entities::{Aircraft, Route, Schedule, ScheduleDetails},
            filter::{SchedulePredicate, ScheduleFilter},
            ports::ScheduleRepository,
            sort::ScheduleOrder,
            value_objects::CreateScheduleInput,
        },
    },
    entity::{
        aircrafts, airports, routes,
        schedules::{ActiveModel, Column, Entity, Model},
    },
    infrastructure::schedule::mappers::{sort_column, sort_order},
};

#[derive(Debug, Clone)]
pub struct PostgresScheduleRepository {
    pub db: Arc<DatabaseConnection>,
}

impl PostgresScheduleRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Resolves routes, airports and aircraft for `models`, keeping their order.
    async fn load_details(&self, models: Vec<Model>) -> Result<Vec<ScheduleDetails>, CoreError> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let route_ids: BTreeSet<i32> = models.iter().map(|m| m.route_id).collect();
        let routes = routes::Entity::find()
            .filter(routes::Column::Id.is_in(route_ids))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to load schedule routes: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        let airport_ids: BTreeSet<i32> = routes
            .iter()
            .flat_map(|r| [r.departure_airport_id, r.arrival_airport_id])
            .collect();
        let airports: HashMap<i32, Airport> = airports::Entity::find()
            .filter(airports::Column::Id.is_in(airport_ids))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to load route airports: {}", e);
                CoreError::Persistence(e.to_string())
            })?
            .into_iter()
            .map(|a| (a.id, Airport::from(a)))
            .collect();

        let aircraft_ids: BTreeSet<i32> = models.iter().map(|m| m.aircraft_id).collect();
        let aircrafts: HashMap<i32, Aircraft> = aircrafts::Entity::find()
            .filter(aircrafts::Column::Id.is_in(aircraft_ids))
            .all(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to load schedule aircrafts: {}", e);
                CoreError::Persistence(e.to_string())
            })?
            .into_iter()
            .map(|a| (a.id, Aircraft::from(a)))
            .collect();

        let mut resolved_routes = HashMap::with_capacity(routes.len());
        for route in routes {
            let departure_airport = lookup(&airports, route.departure_airport_id, "airport")?;
            let arrival_airport = lookup(&airports, route.arrival_airport_id, "airport")?;
            resolved_routes.insert(
                route.id,
                Route {
                    id: route.id,
                    departure_airport,
                    arrival_airport,
                    distance: route.distance,
                    flight_time: route.flight_time,
                },
            );
        }

        models
            .into_iter()
            .map(|model| {
                let route = lookup(&resolved_routes, model.route_id, "route")?;
                let aircraft = lookup(&aircrafts, model.aircraft_id, "aircraft")?;
                Ok(ScheduleDetails {
                    schedule: Schedule::from(model),
                    route,
                    aircraft,
                })
            })
            .collect()
    }
}

fn lookup<T: Clone>(rows: &HashMap<i32, T>, id: i32, kind: &str) -> Result<T, CoreError> {
    rows.get(&id).cloned().ok_or_else(|| {
        error!("Schedule references missing {} {}", kind, id);
        CoreError::Persistence(format!("missing {kind} {id}"))
    })
}

/// Ids of the routes whose `endpoint` airport has the given IATA code.
fn routes_with_endpoint(endpoint: routes::Column, code: &str) -> SelectStatement {
    let airport_ids = Query::select()
        .column(airports::Column::Id)
        .from(airports::Entity)
        .and_where(airports::Column::IataCode.eq(code))
        .to_owned();

    Query::select()
        .column(routes::Column::Id)
        .from(routes::Entity)
        .and_where(endpoint.in_subquery(airport_ids))
        .to_owned()
}

fn predicate_expr(predicate: &SchedulePredicate) -> SimpleExpr {
    match predicate {
        SchedulePredicate::DepartureAirport(code) => Column::RouteId.in_subquery(
            routes_with_endpoint(routes::Column::DepartureAirportId, code),
        ),
        SchedulePredicate::ArrivalAirport(code) => Column::RouteId.in_subquery(
            routes_with_endpoint(routes::Column::ArrivalAirportId, code),
        ),
        SchedulePredicate::DateEquals(date) => Column::Date.eq(*date),
        SchedulePredicate::DateBetween { from, to } => Column::Date.between(*from, *to),
        SchedulePredicate::FlightNumber(number) => Column::FlightNumber.eq(number.as_str()),
    }
}

fn condition(filter: &ScheduleFilter) -> Condition {
    filter
        .predicates()
        .iter()
        .fold(Condition::all(), |condition, predicate| {
            condition.add(predicate_expr(predicate))
        })
}

/// Filtered and ordered select, with `id` as the final tie-breaker.
fn search_query(filter: &ScheduleFilter, order: &ScheduleOrder) -> Select<Entity> {
    order
        .keys()
        .iter()
        .fold(Entity::find().filter(condition(filter)), |query, key| {
            query.order_by(sort_column(key.field), sort_order(key.direction))
        })
        .order_by_asc(Column::Id)
}

impl ScheduleRepository for PostgresScheduleRepository {
    async fn search(
        &self,
        filter: ScheduleFilter,
        order: ScheduleOrder,
    ) -> Result<Vec<ScheduleDetails>, CoreError> {
        let query = search_query(&filter, &order);

        let models = query.all(self.db.as_ref()).await.map_err(|e| {
            error!("Failed to search schedules: {}", e);
            CoreError::Persistence(e.to_string())
        })?;

        self.load_details(models).await
    }

    async fn get_details_by_id(
        &self,
        schedule_id: i32,
    ) -> Result<Option<ScheduleDetails>, CoreError> {
        let Some(model) = Entity::find_by_id(schedule_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get schedule: {}", e);
                CoreError::Persistence(e.to_string())
            })?
        else {
            return Ok(None);
        };

        Ok(self.load_details(vec![model]).await?.pop())
    }

    async fn get_by_id(&self, schedule_id: i32) -> Result<Option<Schedule>, CoreError> {
        let model = Entity::find_by_id(schedule_id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to get schedule: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(model.map(Schedule::from))
    }

    async fn create_schedule(&self, input: CreateScheduleInput) -> Result<Schedule, CoreError> {
        let active_model = ActiveModel {
            id: NotSet,
            date: Set(input.date),
            time: Set(input.time),
            aircraft_id: Set(input.aircraft_id),
            route_id: Set(input.route_id),
            economy_price: Set(input.economy_price),
            confirmed: Set(input.confirmed),
            flight_number: Set(input.flight_number),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to create schedule: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(Schedule::from(created))
    }

    async fn update_schedule(&self, schedule: Schedule) -> Result<Schedule, CoreError> {
        let updated = Entity::update(ActiveModel::from(schedule))
            .exec(self.db.as_ref())
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update schedule: {}", e);
                    CoreError::Persistence(e.to_string())
                }
            })?;

        Ok(Schedule::from(updated))
    }

    async fn toggle_confirmed(&self, schedule_id: i32) -> Result<Option<Schedule>, CoreError> {
        let rows = Entity::update_many()
            .col_expr(Column::Confirmed, Expr::col(Column::Confirmed).not())
            .filter(Column::Id.eq(schedule_id))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to toggle schedule status: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(rows.into_iter().next().map(Schedule::from))
    }

    async fn delete_schedule(&self, schedule_id: i32) -> Result<bool, CoreError> {
        let result = Entity::delete_by_id(schedule_id)
            .exec(self.db.as_ref())
            .await
            .map_err(|e| {
                error!("Failed to delete schedule: {}", e);
                CoreError::Persistence(e.to_string())
            })?;

        Ok(result.rows_affected > 0)
    }
}

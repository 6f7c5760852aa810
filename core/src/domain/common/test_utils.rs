use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::domain::{
    airport::{entities::Airport, ports::MockAirportRepository},
    amenity::ports::MockAmenityRepository,
    booking::ports::MockBookingRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::MockHealthCheckRepository,
    report::ports::MockServiceReportRepository,
    schedule::{
        entities::{Aircraft, Route, Schedule, ScheduleDetails},
        filter::ScheduleFilter,
        ports::ScheduleRepository,
        sort::ScheduleOrder,
        value_objects::CreateScheduleInput,
    },
    survey::ports::MockSurveyRepository,
    user::ports::MockUserRepository,
};

pub fn airport(id: i32, iata_code: &str) -> Airport {
    Airport {
        id,
        country_id: None,
        iata_code: iata_code.to_string(),
        name: format!("{iata_code} International"),
    }
}

fn aircraft() -> Aircraft {
    Aircraft {
        id: 1,
        name: "Boeing 738".to_string(),
        make_model: Some("B738".to_string()),
        total_seats: 120,
        economy_seats: 96,
        business_seats: 24,
    }
}

fn route(departure: &str, arrival: &str) -> Route {
    Route {
        id: 1,
        departure_airport: airport(1, departure),
        arrival_airport: airport(2, arrival),
        distance: 300,
        flight_time: 60,
    }
}

/// Flight `EY{id}` at 08:00 on `date`, unconfirmed.
pub fn schedule_details(
    id: i32,
    departure: &str,
    arrival: &str,
    date: &str,
    economy_price: i64,
) -> ScheduleDetails {
    let route = route(departure, arrival);
    let aircraft = aircraft();

    ScheduleDetails {
        schedule: Schedule {
            id,
            flight_number: format!("EY{id}"),
            date: date.parse::<NaiveDate>().expect("valid test date"),
            time: NaiveTime::from_hms_opt(8, 0, 0).expect("valid test time"),
            route_id: route.id,
            aircraft_id: aircraft.id,
            economy_price: Decimal::new(economy_price, 0),
            confirmed: false,
        },
        route,
        aircraft,
    }
}

/// Schedule store evaluating filters and orderings in memory.
#[derive(Default)]
pub struct InMemoryScheduleRepository {
    rows: Mutex<Vec<ScheduleDetails>>,
    search_calls: Arc<AtomicUsize>,
}

impl InMemoryScheduleRepository {
    pub fn with(rows: Vec<ScheduleDetails>) -> Self {
        Self {
            rows: Mutex::new(rows),
            search_calls: Arc::default(),
        }
    }

    pub fn search_calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.search_calls)
    }
}

impl ScheduleRepository for InMemoryScheduleRepository {
    async fn search(
        &self,
        filter: ScheduleFilter,
        order: ScheduleOrder,
    ) -> Result<Vec<ScheduleDetails>, CoreError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);

        let mut rows: Vec<ScheduleDetails> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|row| filter.matches(row))
            .cloned()
            .collect();
        rows.sort_by(|a, b| order.compare(a, b));

        Ok(rows)
    }

    async fn get_details_by_id(
        &self,
        schedule_id: i32,
    ) -> Result<Option<ScheduleDetails>, CoreError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|row| row.schedule.id == schedule_id)
            .cloned())
    }

    async fn get_by_id(&self, schedule_id: i32) -> Result<Option<Schedule>, CoreError> {
        Ok(self
            .get_details_by_id(schedule_id)
            .await?
            .map(|details| details.schedule))
    }

    async fn create_schedule(&self, input: CreateScheduleInput) -> Result<Schedule, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|row| row.schedule.id).max().unwrap_or(0) + 1;

        let mut details = schedule_details(id, "AUH", "DOH", "2024-01-01", 0);
        details.schedule = Schedule {
            id,
            flight_number: input.flight_number,
            date: input.date,
            time: input.time,
            route_id: input.route_id,
            aircraft_id: input.aircraft_id,
            economy_price: input.economy_price,
            confirmed: input.confirmed,
        };
        rows.push(details.clone());

        Ok(details.schedule)
    }

    async fn update_schedule(&self, schedule: Schedule) -> Result<Schedule, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|row| row.schedule.id == schedule.id)
            .ok_or(CoreError::NotFound)?;
        row.schedule = schedule.clone();

        Ok(schedule)
    }

    async fn toggle_confirmed(&self, schedule_id: i32) -> Result<Option<Schedule>, CoreError> {
        let mut rows = self.rows.lock().unwrap();

        Ok(rows
            .iter_mut()
            .find(|row| row.schedule.id == schedule_id)
            .map(|row| {
                row.schedule.confirmed = !row.schedule.confirmed;
                row.schedule.clone()
            }))
    }

    async fn delete_schedule(&self, schedule_id: i32) -> Result<bool, CoreError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|row| row.schedule.id != schedule_id);

        Ok(rows.len() != before)
    }
}

pub type ScheduleTestService = Service<
    InMemoryScheduleRepository,
    MockAirportRepository,
    MockBookingRepository,
    MockAmenityRepository,
    MockServiceReportRepository,
    MockSurveyRepository,
    MockUserRepository,
    MockHealthCheckRepository,
>;

pub fn service_with(schedules: InMemoryScheduleRepository) -> ScheduleTestService {
    Service::new(
        schedules,
        MockAirportRepository::new(),
        MockBookingRepository::new(),
        MockAmenityRepository::new(),
        MockServiceReportRepository::new(),
        MockSurveyRepository::new(),
        MockUserRepository::new(),
        MockHealthCheckRepository::new(),
    )
}

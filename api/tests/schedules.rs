use std::sync::Arc;

use aerodesk_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use aerodesk_core::{
    application::service_from_connection,
    entity::{aircrafts, airports, routes, schedules},
};
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{Value, json};

fn server(db: DatabaseConnection) -> TestServer {
    let args = Args::parse_from(["aerodesk-api", "--metrics", "false"]);
    let state = AppState::new(Arc::new(args), service_from_connection(db));

    TestServer::new(router(state).unwrap()).unwrap()
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn schedule(id: i32, confirmed: bool) -> schedules::Model {
    schedules::Model {
        id,
        date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        aircraft_id: 1,
        route_id: 1,
        economy_price: Decimal::new(10000, 2),
        confirmed,
        flight_number: format!("EY{id}"),
    }
}

fn airport(id: i32, code: &str, name: &str) -> airports::Model {
    airports::Model {
        id,
        country_id: None,
        iata_code: code.to_string(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn same_departure_and_arrival_is_rejected() {
    let server = server(empty_db());

    let response = server
        .get("/schedules")
        .add_query_param("departureAirportCode", "AUH")
        .add_query_param("arrivalAirportCode", "auh")
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn unknown_sort_field_is_rejected() {
    let server = server(empty_db());

    let response = server
        .get("/schedules")
        .add_query_param("sortBy", r#"[{"field":"price","order":"asc"}]"#)
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn return_date_must_follow_flight_date() {
    let server = server(empty_db());

    let response = server
        .get("/schedules")
        .add_query_param("flightDate", "2024-06-05")
        .add_query_param("returnFlightDate", "2024-06-05")
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn search_prices_for_requested_cabin() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![schedule(1, true)]])
        .append_query_results([vec![routes::Model {
            id: 1,
            departure_airport_id: 1,
            arrival_airport_id: 2,
            distance: 300,
            flight_time: 60,
        }]])
        .append_query_results([vec![
            airport(1, "AUH", "Abu Dhabi"),
            airport(2, "DOH", "Doha"),
        ]])
        .append_query_results([vec![aircrafts::Model {
            id: 1,
            name: "Boeing 738".to_string(),
            make_model: None,
            total_seats: 162,
            economy_seats: 150,
            business_seats: 12,
        }]])
        .into_connection();
    let server = server(db);

    let response = server
        .get("/schedules")
        .add_query_param("departureAirportCode", "AUH")
        .add_query_param("arrivalAirportCode", "DOH")
        .add_query_param("flightDate", "2024-06-01")
        .add_query_param("cabinClass", "business")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["flightNumber"], "EY1");
    assert_eq!(results[0]["cabinClass"], "business");
    assert_eq!(results[0]["finalPrice"], 135);
    assert_eq!(results[0]["route"]["departureAirport"]["iataCode"], "AUH");
    assert_eq!(results[0]["aircraft"]["name"], "Boeing 738");
}

#[tokio::test]
async fn missing_schedule_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<schedules::Model>::new()])
        .into_connection();
    let server = server(db);

    let response = server.get("/schedules/999").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["code"], "E_NOT_FOUND");
    assert_eq!(body["message"], "Schedule not found");
}

#[tokio::test]
async fn toggle_status_returns_updated_record() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![schedule(3, true)]])
        .append_query_results([Vec::<schedules::Model>::new()])
        .into_connection();
    let server = server(db);

    let response = server.patch("/schedules/3/status").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["id"], 3);
    assert_eq!(body["confirmed"], true);

    server
        .patch("/schedules/4/status")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn delete_reports_missing_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ])
        .into_connection();
    let server = server(db);

    let response = server.delete("/schedules/2").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Schedule deleted successfully");

    server.delete("/schedules/2").await.assert_status_not_found();
}

#[tokio::test]
async fn create_rejects_invalid_payloads() {
    let server = server(empty_db());

    server
        .post("/schedules")
        .json(&json!({
            "flightNumber": "EY101",
            "date": "2024-06-01",
            "time": "08:00:00",
            "routeId": 1,
            "aircraftId": 1,
            "economyPrice": -5
        }))
        .await
        .assert_status_bad_request();

    server
        .post("/schedules")
        .json(&json!({ "flightNumber": "EY101" }))
        .await
        .assert_status_bad_request();
}

#[tokio::test]
async fn create_returns_created_record() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![schedule(7, false)]])
        .into_connection();
    let server = server(db);

    let response = server
        .post("/schedules")
        .json(&json!({
            "flightNumber": "EY7",
            "date": "2024-06-01",
            "time": "08:00:00",
            "routeId": 1,
            "aircraftId": 1,
            "economyPrice": 100
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["id"], 7);
    assert_eq!(body["flightNumber"], "EY7");
}

#[tokio::test]
async fn unknown_survey_field_is_rejected() {
    let server = server(empty_db());

    server
        .get("/survey/stats/q9")
        .await
        .assert_status_bad_request();
}

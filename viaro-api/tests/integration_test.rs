use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower::ServiceExt;

use viaro_api::{app, AppState};
use viaro_catalog::{generate_layout, SeatInventory};
use viaro_domain::FareSchedule;
use viaro_store::{MemoryAdminStore, MemoryBookingStore};

async fn test_app() -> Router {
    let admin = MemoryAdminStore::new();
    admin.add_user("admin", "secret").await;

    let state = AppState {
        bookings: Arc::new(MemoryBookingStore::new()),
        admin: Arc::new(admin),
        inventory: Arc::new(Mutex::new(SeatInventory::hydrate(generate_layout(), &[]))),
        fares: FareSchedule::default(),
    };
    app(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(json_body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_seatmap_starts_fully_free() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/v1/seatmap", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sold_count"], 0);

    let rows = body["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[0][2], "");
    assert_eq!(rows[14][6], "91");
}

#[tokio::test]
async fn test_booking_flow_end_to_end() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/bookings",
        Some(json!({
            "pickup_location": "Leeds",
            "drop_location": "York",
            "seat_numbers": ["1", "2"],
            "passenger_names": ["Asha", "Omar"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_fare"], 232.0);
    assert_eq!(body["status"], "CONFIRMED");
    let booking_id = body["booking_id"].as_str().unwrap().to_string();

    // Details round-trip.
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/v1/bookings/{booking_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seat_numbers"], json!(["1", "2"]));
    assert_eq!(body["passenger_names"], json!(["Asha", "Omar"]));

    // The sale is projected onto the seat map.
    let (_, body) = send(&app, Method::GET, "/v1/seatmap", None).await;
    assert_eq!(body["sold_count"], 2);
    assert_eq!(body["rows"][0][0], "*");
    assert_eq!(body["rows"][0][1], "*");

    // Same seat, same leg: conflict.
    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/bookings",
        Some(json!({
            "pickup_location": "Leeds",
            "drop_location": "York",
            "seat_numbers": ["1"],
            "passenger_names": ["Mei"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Same seat, different leg: still sellable.
    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/bookings",
        Some(json!({
            "pickup_location": "Leeds",
            "drop_location": "Hull",
            "seat_numbers": ["1"],
            "passenger_names": ["Mei"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_booking_validation() {
    let app = test_app().await;

    // Seat/name count mismatch.
    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/bookings",
        Some(json!({
            "pickup_location": "Leeds",
            "drop_location": "York",
            "seat_numbers": ["1", "2"],
            "passenger_names": ["Asha"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Seat outside the layout.
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/bookings",
        Some(json!({
            "pickup_location": "Leeds",
            "drop_location": "York",
            "seat_numbers": ["92"],
            "passenger_names": ["Asha"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown seat 92");

    // Duplicate seat within one request.
    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/bookings",
        Some(json!({
            "pickup_location": "Leeds",
            "drop_location": "York",
            "seat_numbers": ["3", "3"],
            "passenger_names": ["Asha", "Omar"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Unknown booking id.
    let (status, _) = send(
        &app,
        Method::GET,
        "/v1/bookings/00000000-0000-0000-0000-000000000000",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_login_and_routes() {
    let app = test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/admin/login",
        Some(json!({"username": "admin", "password": "secret"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/admin/login",
        Some(json!({"username": "admin", "password": "nope"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // No routes configured yet: empty map, not an error.
    let (status, body) = send(&app, Method::GET, "/v1/routes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));

    let (status, _) = send(
        &app,
        Method::POST,
        "/v1/admin/cities",
        Some(json!({"city_name": "Leeds", "stops": ["Central", "North"]})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::GET, "/v1/routes", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["Leeds"], json!(["Central", "North"]));
}

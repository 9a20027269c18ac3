use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use viaro_booking::{AvailabilityChecker, BookingCommitter, BookingError};
use viaro_domain::{Booking, BookingDraft};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/bookings", post(commit_booking))
        .route("/v1/bookings/{id}", get(get_booking))
}

#[derive(Debug, Deserialize)]
pub struct BookingRequest {
    pub pickup_location: String,
    pub drop_location: String,
    pub seat_numbers: Vec<String>,
    pub passenger_names: Vec<String>,
}

#[derive(Debug, Serialize)]
struct BookingResponse {
    booking_id: Uuid,
    total_fare: f64,
    status: String,
}

async fn commit_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    // 1. Validate the request shape before touching the store.
    if req.seat_numbers.is_empty() {
        return Err(AppError::ValidationError(
            "at least one seat is required".to_string(),
        ));
    }
    if req.seat_numbers.len() != req.passenger_names.len() {
        return Err(AppError::ValidationError(format!(
            "{} seats but {} passenger names",
            req.seat_numbers.len(),
            req.passenger_names.len()
        )));
    }
    let unique: HashSet<&str> = req.seat_numbers.iter().map(String::as_str).collect();
    if unique.len() != req.seat_numbers.len() {
        return Err(AppError::ValidationError(
            "duplicate seat in request".to_string(),
        ));
    }

    // 2. Seat identifiers must exist in the layout. The availability
    //    checker does not validate ids, so the caller does.
    {
        let inventory = state.inventory.lock().await;
        for seat in &req.seat_numbers {
            if !inventory.contains(seat) {
                return Err(AppError::ValidationError(format!(
                    "unknown seat {seat}"
                )));
            }
        }
    }

    // 3. Per-seat availability against the store, scoped to this leg.
    let checker = AvailabilityChecker::new(state.bookings.clone());
    for seat in &req.seat_numbers {
        let free = checker
            .is_available(seat, &req.pickup_location, &req.drop_location)
            .await
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;
        if !free {
            return Err(AppError::ConflictError(format!(
                "seat {seat} is already booked for this leg"
            )));
        }
    }

    // 4. Price and commit. The insert is atomic; a failure here leaves
    //    no row behind and we never reach the projection update.
    let total_fare = state.fares.calculate(req.seat_numbers.len() as u32);
    let committer = BookingCommitter::new(state.bookings.clone());
    let draft = BookingDraft {
        pickup_location: req.pickup_location.clone(),
        drop_location: req.drop_location.clone(),
        seat_numbers: req.seat_numbers.clone(),
        passenger_names: req.passenger_names.clone(),
        total_fare,
    };
    let booking_id = committer.commit(draft).await.map_err(|e| match e {
        BookingError::Persist(err) => AppError::InternalServerError(err.to_string()),
        other => AppError::ValidationError(other.to_string()),
    })?;

    // 5. Project the sale onto the in-memory seat map.
    let mut inventory = state.inventory.lock().await;
    for seat in &req.seat_numbers {
        inventory
            .mark_sold(seat)
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;
    }

    Ok(Json(BookingResponse {
        booking_id,
        total_fare,
        status: "CONFIRMED".to_string(),
    }))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, AppError> {
    let booking = state
        .bookings
        .get_booking(id)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))?;

    match booking {
        Some(b) => Ok(Json(b)),
        None => Err(AppError::NotFoundError(format!("booking {id} not found"))),
    }
}

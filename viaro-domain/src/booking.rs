use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One persisted purchase event: one or more seats and their passengers
/// for a single pickup/drop pair. Never mutated or deleted once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub pickup_location: String,
    pub drop_location: String,
    /// Seat identifiers, unique within the booking.
    pub seat_numbers: Vec<String>,
    /// Positionally paired with `seat_numbers`, same length.
    pub passenger_names: Vec<String>,
    pub total_fare: f64,
    pub booking_date: DateTime<Utc>,
}

/// Insert payload for a confirmed booking. The identity and booking date
/// are assigned by the store on insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub pickup_location: String,
    pub drop_location: String,
    pub seat_numbers: Vec<String>,
    pub passenger_names: Vec<String>,
    pub total_fare: f64,
}

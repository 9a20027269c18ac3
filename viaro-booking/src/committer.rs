use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use viaro_domain::repository::BookingStore;
use viaro_domain::{BookingDraft, StoreError};

/// Persists confirmed bookings. Persistence is separated from the
/// in-memory projection: on success the caller marks each seat sold on
/// the `SeatInventory`; this component never touches it.
///
/// The committer does not re-check availability. The availability read
/// and the insert are separate store round-trips with no lock between
/// them, so two logically concurrent sessions can double-sell a seat; a
/// multi-client deployment must re-validate inside the insert
/// transaction or lean on a store-level uniqueness constraint.
pub struct BookingCommitter {
    store: Arc<dyn BookingStore>,
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("a booking needs at least one seat")]
    EmptySeatList,

    #[error("seat/passenger count mismatch: {seats} seats, {names} names")]
    PassengerCountMismatch { seats: usize, names: usize },

    #[error("failed to persist booking: {0}")]
    Persist(#[from] StoreError),
}

impl BookingCommitter {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// Atomically insert one booking row with the full seat and
    /// passenger lists and return the store-assigned id. On any store
    /// failure the transaction is rolled back in full and no id is
    /// returned; no partial seat list is ever persisted.
    pub async fn commit(&self, draft: BookingDraft) -> Result<Uuid, BookingError> {
        if draft.seat_numbers.is_empty() {
            return Err(BookingError::EmptySeatList);
        }
        if draft.seat_numbers.len() != draft.passenger_names.len() {
            return Err(BookingError::PassengerCountMismatch {
                seats: draft.seat_numbers.len(),
                names: draft.passenger_names.len(),
            });
        }

        let booking_id = self.store.insert_booking(&draft).await?;
        info!(
            %booking_id,
            seats = draft.seat_numbers.len(),
            pickup = %draft.pickup_location,
            drop = %draft.drop_location,
            "booking committed"
        );
        Ok(booking_id)
    }
}

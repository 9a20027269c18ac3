use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

use crate::booking::{Booking, BookingDraft};
use crate::error::StoreError;

/// Repository trait for booking persistence. The store is the authority
/// on which seats are taken; the in-memory inventory is only a display
/// projection over it.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist one booking row atomically and return its assigned id.
    /// On failure the whole row is rolled back; no partial seat list is
    /// ever persisted.
    async fn insert_booking(&self, draft: &BookingDraft) -> Result<Uuid, StoreError>;

    /// Number of persisted bookings holding `seat_number` for exactly
    /// this pickup/drop pair.
    async fn count_bookings_matching(
        &self,
        seat_number: &str,
        pickup: &str,
        drop: &str,
    ) -> Result<i64, StoreError>;

    /// Seat lists of every persisted booking, for inventory hydration.
    async fn all_booking_seat_lists(&self) -> Result<Vec<Vec<String>>, StoreError>;

    /// Fetch one booking by id. `None` means no such booking, which is
    /// distinct from a store failure.
    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, StoreError>;
}

/// Repository trait for the administrative collaborator: credentials and
/// the city/stops route map.
#[async_trait]
pub trait AdminStore: Send + Sync {
    async fn verify_credentials(&self, username: &str, password: &str)
        -> Result<bool, StoreError>;

    /// Insert a city and its stops as one transaction; either all rows
    /// land or none do.
    async fn insert_city_with_stops(
        &self,
        city_name: &str,
        stops: &[String],
    ) -> Result<(), StoreError>;

    /// City name -> stop names, read-only to this core.
    async fn routes(&self) -> Result<BTreeMap<String, BTreeSet<String>>, StoreError>;
}

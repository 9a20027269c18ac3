use std::sync::Arc;

use viaro_domain::repository::BookingStore;
use viaro_domain::StoreError;

/// Read-only availability decision against the persistent store. The
/// store is authoritative; the in-memory seat inventory is a display
/// layer and is not consulted here.
pub struct AvailabilityChecker {
    store: Arc<dyn BookingStore>,
}

impl AvailabilityChecker {
    pub fn new(store: Arc<dyn BookingStore>) -> Self {
        Self { store }
    }

    /// True iff no persisted booking holds `seat_id` for exactly this
    /// pickup/drop pair (string equality, not route containment). The
    /// same physical seat stays sellable on a different leg.
    ///
    /// An identifier outside the layout is still checked and reports
    /// available when unbooked; validating the identifier is the
    /// caller's job.
    pub async fn is_available(
        &self,
        seat_id: &str,
        pickup: &str,
        drop: &str,
    ) -> Result<bool, StoreError> {
        let taken = self
            .store
            .count_bookings_matching(seat_id, pickup, drop)
            .await?;
        Ok(taken == 0)
    }
}

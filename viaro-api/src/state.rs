use std::sync::Arc;
use tokio::sync::Mutex;
use viaro_catalog::SeatInventory;
use viaro_domain::repository::{AdminStore, BookingStore};
use viaro_domain::FareSchedule;

#[derive(Clone)]
pub struct AppState {
    pub bookings: Arc<dyn BookingStore>,
    pub admin: Arc<dyn AdminStore>,
    /// Display projection over the layout, hydrated at startup and
    /// updated after each successful commit.
    pub inventory: Arc<Mutex<SeatInventory>>,
    pub fares: FareSchedule,
}

//! In-memory store backends with the same contracts as the Postgres
//! repositories. Used by the workflow and API test suites and for local
//! development without a database.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tokio::sync::Mutex;
use uuid::Uuid;

use viaro_domain::repository::{AdminStore, BookingStore};
use viaro_domain::{Booking, BookingDraft, StoreError};

#[derive(Default)]
pub struct MemoryBookingStore {
    bookings: Mutex<Vec<Booking>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn booking_count(&self) -> usize {
        self.bookings.lock().await.len()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn insert_booking(&self, draft: &BookingDraft) -> Result<Uuid, StoreError> {
        let booking_id = Uuid::new_v4();
        let booking = Booking {
            id: booking_id,
            pickup_location: draft.pickup_location.clone(),
            drop_location: draft.drop_location.clone(),
            seat_numbers: draft.seat_numbers.clone(),
            passenger_names: draft.passenger_names.clone(),
            total_fare: draft.total_fare,
            booking_date: Utc::now(),
        };
        self.bookings.lock().await.push(booking);
        Ok(booking_id)
    }

    async fn count_bookings_matching(
        &self,
        seat_number: &str,
        pickup: &str,
        drop: &str,
    ) -> Result<i64, StoreError> {
        let count = self
            .bookings
            .lock()
            .await
            .iter()
            .filter(|b| {
                b.pickup_location == pickup
                    && b.drop_location == drop
                    && b.seat_numbers.iter().any(|s| s == seat_number)
            })
            .count();
        Ok(count as i64)
    }

    async fn all_booking_seat_lists(&self) -> Result<Vec<Vec<String>>, StoreError> {
        let lists = self
            .bookings
            .lock()
            .await
            .iter()
            .map(|b| b.seat_numbers.clone())
            .collect();
        Ok(lists)
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, StoreError> {
        let found = self
            .bookings
            .lock()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned();
        Ok(found)
    }
}

#[derive(Default)]
pub struct MemoryAdminStore {
    users: Mutex<HashMap<String, String>>,
    routes: Mutex<BTreeMap<String, BTreeSet<String>>>,
}

impl MemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, username: &str, password: &str) {
        self.users
            .lock()
            .await
            .insert(username.to_string(), password.to_string());
    }
}

#[async_trait]
impl AdminStore for MemoryAdminStore {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, StoreError> {
        let users = self.users.lock().await;
        Ok(users.get(username).map(String::as_str) == Some(password))
    }

    async fn insert_city_with_stops(
        &self,
        city_name: &str,
        stops: &[String],
    ) -> Result<(), StoreError> {
        let mut routes = self.routes.lock().await;
        let entry = routes.entry(city_name.to_string()).or_default();
        for stop in stops {
            entry.insert(stop.clone());
        }
        Ok(())
    }

    async fn routes(&self) -> Result<BTreeMap<String, BTreeSet<String>>, StoreError> {
        Ok(self.routes.lock().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(pickup: &str, drop: &str, seats: &[&str]) -> BookingDraft {
        BookingDraft {
            pickup_location: pickup.to_string(),
            drop_location: drop.to_string(),
            seat_numbers: seats.iter().map(|s| s.to_string()).collect(),
            passenger_names: seats.iter().map(|s| format!("Passenger {s}")).collect(),
            total_fare: 116.0,
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let store = MemoryBookingStore::new();
        let id = store
            .insert_booking(&draft("Leeds", "York", &["1", "2"]))
            .await
            .unwrap();

        let booking = store.get_booking(id).await.unwrap().unwrap();
        assert_eq!(booking.seat_numbers, vec!["1", "2"]);

        let missing = store.get_booking(Uuid::new_v4()).await.unwrap();
        assert!(missing.is_none());

        assert_eq!(store.all_booking_seat_lists().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_count_is_leg_scoped() {
        let store = MemoryBookingStore::new();
        store
            .insert_booking(&draft("Leeds", "York", &["7"]))
            .await
            .unwrap();

        assert_eq!(
            store
                .count_bookings_matching("7", "Leeds", "York")
                .await
                .unwrap(),
            1
        );
        assert_eq!(
            store
                .count_bookings_matching("7", "Leeds", "Hull")
                .await
                .unwrap(),
            0
        );
    }

    #[tokio::test]
    async fn test_admin_store() {
        let admin = MemoryAdminStore::new();
        admin.add_user("admin", "secret").await;

        assert!(admin.verify_credentials("admin", "secret").await.unwrap());
        assert!(!admin.verify_credentials("admin", "wrong").await.unwrap());

        admin
            .insert_city_with_stops("Leeds", &["Central".into(), "North".into()])
            .await
            .unwrap();
        let routes = admin.routes().await.unwrap();
        assert_eq!(routes["Leeds"].len(), 2);
    }
}

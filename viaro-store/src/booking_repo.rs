use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use viaro_domain::repository::BookingStore;
use viaro_domain::{Booking, BookingDraft, StoreError};

pub struct PgBookingStore {
    pool: PgPool,
}

impl PgBookingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct BookingRow {
    id: Uuid,
    pickup_location: String,
    drop_location: String,
    seat_numbers: Vec<String>,
    passenger_names: Vec<String>,
    total_fare: f64,
    booking_date: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            pickup_location: row.pickup_location,
            drop_location: row.drop_location,
            seat_numbers: row.seat_numbers,
            passenger_names: row.passenger_names,
            total_fare: row.total_fare,
            booking_date: row.booking_date,
        }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn insert_booking(&self, draft: &BookingDraft) -> Result<Uuid, StoreError> {
        let booking_id = Uuid::new_v4();

        // The row (full seat list included) lands in a single insert
        // inside an explicit transaction; an early return drops the
        // transaction, which rolls everything back.
        let mut tx = self.pool.begin().await.map_err(StoreError::query)?;

        sqlx::query(
            r#"
            INSERT INTO bookings
            (id, pickup_location, drop_location, seat_numbers, passenger_names, total_fare)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(booking_id)
        .bind(&draft.pickup_location)
        .bind(&draft.drop_location)
        .bind(&draft.seat_numbers)
        .bind(&draft.passenger_names)
        .bind(draft.total_fare)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::query)?;

        tx.commit().await.map_err(StoreError::query)?;

        Ok(booking_id)
    }

    async fn count_bookings_matching(
        &self,
        seat_number: &str,
        pickup: &str,
        drop: &str,
    ) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM bookings
            WHERE $1 = ANY(seat_numbers)
            AND pickup_location = $2
            AND drop_location = $3
            "#,
        )
        .bind(seat_number)
        .bind(pickup)
        .bind(drop)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::query)?;

        Ok(count)
    }

    async fn all_booking_seat_lists(&self) -> Result<Vec<Vec<String>>, StoreError> {
        let lists: Vec<Vec<String>> = sqlx::query_scalar("SELECT seat_numbers FROM bookings")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::query)?;

        Ok(lists)
    }

    async fn get_booking(&self, id: Uuid) -> Result<Option<Booking>, StoreError> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
            SELECT id, pickup_location, drop_location, seat_numbers,
                   passenger_names, total_fare, booking_date
            FROM bookings WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::query)?;

        Ok(row.map(Booking::from))
    }
}

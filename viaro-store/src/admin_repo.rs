use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::{BTreeMap, BTreeSet};

use viaro_domain::repository::AdminStore;
use viaro_domain::StoreError;

pub struct PgAdminStore {
    pool: PgPool,
}

impl PgAdminStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminStore for PgAdminStore {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<bool, StoreError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM admin_users
            WHERE username = $1 AND password = $2
            "#,
        )
        .bind(username)
        .bind(password)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::query)?;

        Ok(count > 0)
    }

    async fn insert_city_with_stops(
        &self,
        city_name: &str,
        stops: &[String],
    ) -> Result<(), StoreError> {
        // City and stops commit together or not at all; a mid-loop
        // failure drops the transaction and rolls the city row back.
        let mut tx = self.pool.begin().await.map_err(StoreError::query)?;

        let city_id: i32 =
            sqlx::query_scalar("INSERT INTO cities (city_name) VALUES ($1) RETURNING id")
                .bind(city_name)
                .fetch_one(&mut *tx)
                .await
                .map_err(StoreError::query)?;

        for stop in stops {
            sqlx::query("INSERT INTO stops (city_id, stop_name) VALUES ($1, $2)")
                .bind(city_id)
                .bind(stop)
                .execute(&mut *tx)
                .await
                .map_err(StoreError::query)?;
        }

        tx.commit().await.map_err(StoreError::query)?;

        Ok(())
    }

    async fn routes(&self) -> Result<BTreeMap<String, BTreeSet<String>>, StoreError> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            r#"
            SELECT c.city_name, s.stop_name
            FROM cities c
            JOIN stops s ON c.id = s.city_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::query)?;

        let mut routes: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (city, stop) in rows {
            routes.entry(city).or_default().insert(stop);
        }

        Ok(routes)
    }
}

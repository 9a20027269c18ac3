use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use viaro_api::{app, AppState};
use viaro_catalog::{generate_layout, SeatInventory};
use viaro_domain::repository::BookingStore;
use viaro_store::{DbClient, PgAdminStore, PgBookingStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viaro_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = viaro_store::Config::load().expect("Failed to load config");
    tracing::info!("Starting Viaro API on port {}", config.server.port);

    // A store connection failure is fatal to session start.
    let db = DbClient::new(&config.database.url)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let booking_store = Arc::new(PgBookingStore::new(db.pool.clone()));
    let admin_store = Arc::new(PgAdminStore::new(db.pool.clone()));

    // Hydrate the in-memory seat map from all persisted bookings.
    let seat_lists = booking_store
        .all_booking_seat_lists()
        .await
        .expect("Failed to load persisted bookings");
    let inventory = SeatInventory::hydrate(generate_layout(), &seat_lists);
    tracing::info!(sold = inventory.sold_count(), "Seat inventory hydrated");

    let state = AppState {
        bookings: booking_store,
        admin: admin_store,
        inventory: Arc::new(Mutex::new(inventory)),
        fares: config.business_rules.fare_schedule(),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app(state))
        .await
        .expect("Server error");
}

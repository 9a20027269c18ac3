pub mod admin_repo;
pub mod app_config;
pub mod booking_repo;
pub mod database;
pub mod memory;

pub use admin_repo::PgAdminStore;
pub use app_config::Config;
pub use booking_repo::PgBookingStore;
pub use database::DbClient;
pub use memory::{MemoryAdminStore, MemoryBookingStore};

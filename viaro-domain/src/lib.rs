pub mod booking;
pub mod error;
pub mod fare;
pub mod repository;

pub use booking::{Booking, BookingDraft};
pub use error::StoreError;
pub use fare::{calculate_fare, FareSchedule};

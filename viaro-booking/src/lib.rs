pub mod availability;
pub mod committer;

pub use availability::AvailabilityChecker;
pub use committer::{BookingCommitter, BookingError};

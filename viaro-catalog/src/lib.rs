pub mod inventory;
pub mod layout;

pub use inventory::{InventoryError, SeatInventory, SeatState};
pub use layout::{generate_layout, SeatLayout, Slot};

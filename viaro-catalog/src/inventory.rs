use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::layout::{SeatLayout, Slot};

/// Display token for a sold seat.
pub const SOLD_MARKER: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeatState {
    Free,
    Sold,
}

/// In-memory FREE/SOLD projection over the seat layout, derived from
/// persisted bookings. Not the authority on availability - the store is;
/// this exists for display and quick feedback. Mutated only through
/// `hydrate` and `mark_sold`.
pub struct SeatInventory {
    layout: SeatLayout,
    states: HashMap<String, SeatState>,
}

impl SeatInventory {
    /// Build the inventory from the layout and the seat lists of every
    /// persisted booking: each referenced seat flips to SOLD, everything
    /// else is FREE. A full reconciliation pass, so re-running it with
    /// the same booking set yields the same state. Identifiers that are
    /// not part of the layout are ignored, matching the legacy loader.
    pub fn hydrate(layout: SeatLayout, seat_lists: &[Vec<String>]) -> Self {
        let mut states: HashMap<String, SeatState> = layout
            .seat_ids()
            .map(|id| (id.to_string(), SeatState::Free))
            .collect();

        for list in seat_lists {
            for seat_id in list {
                if let Some(state) = states.get_mut(seat_id) {
                    *state = SeatState::Sold;
                }
            }
        }

        Self { layout, states }
    }

    /// Transition a seat to SOLD. Fails if the identifier is not part of
    /// the layout. Marking an already-SOLD seat again is a tolerated
    /// no-op (legacy behavior, kept as defined).
    pub fn mark_sold(&mut self, seat_id: &str) -> Result<(), InventoryError> {
        match self.states.get_mut(seat_id) {
            Some(state) => {
                *state = SeatState::Sold;
                Ok(())
            }
            None => Err(InventoryError::InvalidSeat(seat_id.to_string())),
        }
    }

    pub fn state(&self, seat_id: &str) -> Option<SeatState> {
        self.states.get(seat_id).copied()
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.states.contains_key(seat_id)
    }

    pub fn sold_count(&self) -> usize {
        self.states
            .values()
            .filter(|s| **s == SeatState::Sold)
            .count()
    }

    /// Display projection: one token per slot, row by row. A FREE seat
    /// shows its identifier, a SOLD seat shows `*`, an aisle slot is
    /// blank. Lazy and restartable; never mutates.
    pub fn render(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        self.layout.rows().iter().map(move |row| {
            row.iter()
                .map(|slot| match slot {
                    Slot::Seat(id) => match self.states.get(id) {
                        Some(SeatState::Sold) => SOLD_MARKER.to_string(),
                        _ => id.clone(),
                    },
                    Slot::Aisle => String::new(),
                })
                .collect()
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("unknown seat identifier: {0}")]
    InvalidSeat(String),
}

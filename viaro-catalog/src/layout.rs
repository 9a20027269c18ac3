use serde::{Deserialize, Serialize};

/// Rows in the coach, including the full-width back row.
pub const ROW_COUNT: usize = 15;

/// Sellable seats: 14 standard rows of 6 plus the 7-seat back row.
pub const SEAT_COUNT: usize = 91;

/// One physical position in a row: either a sellable seat or the aisle
/// gap between the left pair and the right block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    Seat(String),
    Aisle,
}

/// The static seat-map topology of the coach. Immutable after
/// construction; seat identifiers are unique contiguous integers
/// rendered as strings, assigned row-major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatLayout {
    rows: Vec<Vec<Slot>>,
}

impl SeatLayout {
    pub fn rows(&self) -> &[Vec<Slot>] {
        &self.rows
    }

    /// All seat identifiers in numbering order.
    pub fn seat_ids(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().filter_map(|slot| match slot {
            Slot::Seat(id) => Some(id.as_str()),
            Slot::Aisle => None,
        })
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.seat_ids().any(|id| id == seat_id)
    }
}

/// Build the coach topology. Deterministic, no inputs.
///
/// Rows 0-13 hold six seats around a two-slot aisle gap
/// (`[seat, seat, aisle, aisle, seat, seat, seat, seat]`); the aisle
/// slots consume no seat numbers, so row `i` carries `6i+1 ..= 6i+6`.
/// Row 14 is a contiguous 7-seat bench continuing the sequence, for 91
/// seats in total.
pub fn generate_layout() -> SeatLayout {
    let mut rows = Vec::with_capacity(ROW_COUNT);
    let mut next = 1u32;

    for row in 0..ROW_COUNT {
        if row < ROW_COUNT - 1 {
            let mut slots = Vec::with_capacity(8);
            for _ in 0..2 {
                slots.push(Slot::Seat(next.to_string()));
                next += 1;
            }
            slots.push(Slot::Aisle);
            slots.push(Slot::Aisle);
            for _ in 0..4 {
                slots.push(Slot::Seat(next.to_string()));
                next += 1;
            }
            rows.push(slots);
        } else {
            let mut slots = Vec::with_capacity(7);
            for _ in 0..7 {
                slots.push(Slot::Seat(next.to_string()));
                next += 1;
            }
            rows.push(slots);
        }
    }

    SeatLayout { rows }
}

//! Cabin layout tiers derived from seat capacity.

use serde::{Deserialize, Serialize};

/// Physical cabin configuration chosen from a flight's capacity.
///
/// Each tier fixes the grid width (including aisle columns) and the aisle
/// positions. Seat letters run left to right over the non-aisle columns.
///
/// | capacity | seats per side | columns | aisles  |
/// |----------|----------------|---------|---------|
/// | < 60     | 2              | 5       | {2}     |
/// | 60..150  | 3              | 7       | {3}     |
/// | >= 150   | 5              | 11      | {3, 8}  |
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CabinLayout {
    /// 2-2 configuration for small aircraft
    Regional,
    /// 3-3 configuration for single-aisle aircraft
    NarrowBody,
    /// Twin-aisle configuration for large aircraft
    WideBody,
}

impl CabinLayout {
    /// Capacities below this use the regional layout.
    pub const NARROW_BODY_MIN: usize = 60;
    /// Capacities at or above this use the wide-body layout.
    pub const WIDE_BODY_MIN: usize = 150;
    /// Largest capacity a seat map can be derived for.
    pub const MAX_CAPACITY: usize = 1000;

    /// Chooses the layout tier for a capacity.
    pub fn for_capacity(capacity: usize) -> Self {
        if capacity < Self::NARROW_BODY_MIN {
            CabinLayout::Regional
        } else if capacity < Self::WIDE_BODY_MIN {
            CabinLayout::NarrowBody
        } else {
            CabinLayout::WideBody
        }
    }

    /// Seats on each side of an aisle.
    pub fn seats_per_side(&self) -> usize {
        match self {
            CabinLayout::Regional => 2,
            CabinLayout::NarrowBody => 3,
            CabinLayout::WideBody => 5,
        }
    }

    /// Grid width including aisle columns.
    pub fn total_columns(&self) -> usize {
        match self {
            CabinLayout::Regional => 5,
            CabinLayout::NarrowBody => 7,
            CabinLayout::WideBody => 11,
        }
    }

    /// Aisle column indices in ascending order.
    pub fn aisles(&self) -> &'static [usize] {
        match self {
            CabinLayout::Regional => &[2],
            CabinLayout::NarrowBody => &[3],
            CabinLayout::WideBody => &[3, 8],
        }
    }

    /// Whether the grid column is an aisle.
    pub fn is_aisle(&self, column: usize) -> bool {
        self.aisles().contains(&column)
    }

    /// Number of bookable columns in a full row.
    pub fn seat_columns(&self) -> usize {
        self.total_columns() - self.aisles().len()
    }

    /// Maps a 0-based seat letter offset to its grid column.
    ///
    /// The offset moves one column right for every aisle at or before the
    /// running position, so `C` in the regional tier lands on column 3 and
    /// `H` in the wide-body tier lands on column 9. Offsets past the last
    /// seat column map beyond the grid width.
    pub fn column_for_offset(&self, offset: usize) -> usize {
        self.aisles()
            .iter()
            .fold(offset, |column, &aisle| if aisle <= column { column + 1 } else { column })
    }

    /// Maps a grid column back to its 0-based seat letter offset.
    ///
    /// Returns `None` for aisle columns and columns outside the grid.
    pub fn offset_for_column(&self, column: usize) -> Option<usize> {
        if column >= self.total_columns() || self.is_aisle(column) {
            return None;
        }
        let aisles_before = self.aisles().iter().filter(|&&aisle| aisle < column).count();
        Some(column - aisles_before)
    }

    /// Seat letters of a full row, left to right.
    pub fn seat_letters(&self) -> impl Iterator<Item = char> {
        (b'A'..).take(self.seat_columns()).map(char::from)
    }

    /// Human-readable configuration, e.g. `3-3`.
    pub fn describe(&self) -> &'static str {
        match self {
            CabinLayout::Regional => "2-2",
            CabinLayout::NarrowBody => "3-3",
            CabinLayout::WideBody => "3-4-2",
        }
    }
}

//! Text encoding of the occupancy grid.
//!
//! One line per row, one `0` (free) or `1` (occupied) per cell, separated by
//! commas:
//!
//! ```text
//! 1,0,1,0,0
//! 0,0,1,0,0
//! ```
//!
//! The reader also accepts the older form with a trailing comma on every
//! line.

use log::warn;
use serde::Serialize;

use super::{Cell, SeatMap};
use crate::error::{ReservationError, Result};

/// How a seat map was reconstructed from stored text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Restored {
    /// Stored grid matched the layout and was taken as is.
    Loaded,
    /// Stored grid was used, but cells that can never be free (aisles and
    /// non-existent seats) were stored as free and have been corrected.
    Repaired { cells: usize },
    /// Stored grid was missing or unusable; a fresh layout was derived and
    /// any previous occupancy is lost.
    Rebuilt { reason: String },
}

impl SeatMap {
    /// Encodes the grid as comma-separated `0`/`1` rows.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.rows() * (self.columns() * 2 + 1));
        for row in &self.cells {
            let line: Vec<&str> = row
                .iter()
                .map(|cell| if cell.is_occupied() { "1" } else { "0" })
                .collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }
        out
    }

    /// Rebuilds a seat map from its capacity and stored grid text.
    ///
    /// The layout is always derived from `capacity`; the stored grid only
    /// supplies which real seats are booked. When the text is absent, empty,
    /// or does not match the derived grid dimensions, the fresh layout is
    /// returned with [`Restored::Rebuilt`] and every seat is free again.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::InvalidGrid` if the text contains a token
    /// other than `0` or `1`, and `ReservationError::InvalidInput` if
    /// `capacity` is zero or above [`super::CabinLayout::MAX_CAPACITY`].
    pub fn restore(capacity: usize, stored: Option<&str>) -> Result<(Self, Restored)> {
        let mut map = Self::new(capacity)?;

        let Some(text) = stored.filter(|text| !text.trim().is_empty()) else {
            return Ok((map, Restored::Rebuilt {
                reason: "no stored seat grid".to_string(),
            }));
        };

        let grid = parse_grid(text)?;
        if grid.len() != map.rows() {
            let reason = format!(
                "stored grid has {} rows, layout for capacity {} has {}",
                grid.len(),
                capacity,
                map.rows()
            );
            return Ok((map, Restored::Rebuilt { reason }));
        }
        if let Some((index, row)) = grid
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != map.columns())
        {
            let reason = format!(
                "stored row {} has {} cells, layout has {} columns",
                index + 1,
                row.len(),
                map.columns()
            );
            return Ok((map, Restored::Rebuilt { reason }));
        }

        let mut repaired = 0;
        for (cells, stored_row) in map.cells.iter_mut().zip(&grid) {
            for (cell, &occupied) in cells.iter_mut().zip(stored_row) {
                match (*cell, occupied) {
                    (Cell::Open, true) => *cell = Cell::Booked,
                    (Cell::Aisle | Cell::Blocked, false) => repaired += 1,
                    _ => {}
                }
            }
        }
        map.available = map.count(Cell::Open);

        if repaired > 0 {
            warn!("Seat grid stored {repaired} never-bookable cell(s) as free; treated as occupied");
            Ok((map, Restored::Repaired { cells: repaired }))
        } else {
            Ok((map, Restored::Loaded))
        }
    }
}

/// Parses grid text into rows of occupied flags, skipping blank lines and
/// empty tokens.
fn parse_grid(text: &str) -> Result<Vec<Vec<bool>>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            line.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(|token| match token {
                    "1" => Ok(true),
                    "0" => Ok(false),
                    other => Err(ReservationError::InvalidGrid {
                        line: index + 1,
                        reason: format!("unexpected cell value '{other}'"),
                    }),
                })
                .collect()
        })
        .collect()
}

//! Seat map engine: cabin layout, seat occupancy and the seat label codec.
//!
//! A [`SeatMap`] turns an abstract capacity into a physical grid of rows and
//! columns (see [`CabinLayout`]) and tracks which seats are taken. All
//! mutations keep the grid and the available-seat counter in step:
//!
//! ```text
//! open seats + booked seats == capacity
//! ```
//!
//! Cells created by row rounding that are not real seats are marked
//! [`Cell::Blocked`] when the layout is derived; they render as occupied and
//! can never be booked or cancelled.
//!
//! # Examples
//!
//! ```rust
//! use jetway_core::seatmap::SeatMap;
//!
//! let mut seats = SeatMap::new(65).unwrap();
//! assert_eq!(seats.rows(), 11);
//! assert_eq!(seats.first_available().as_deref(), Some("1A"));
//!
//! seats.book("1A").unwrap();
//! assert_eq!(seats.available_seats(), 64);
//! assert!(seats.book("1A").unwrap_err().is_booking());
//!
//! seats.cancel("1a").unwrap();
//! assert_eq!(seats.available_seats(), 65);
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

mod codec;
mod label;
mod layout;


pub use codec::Restored;
pub use label::{Position, SeatLabel};
pub use layout::CabinLayout;

use crate::error::{ReservationError, Result};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Aisle column; never bookable
    Aisle,
    /// Real seat, free
    Open,
    /// Real seat, taken
    Booked,
    /// Not a real seat (row rounding); never bookable
    Blocked,
}

impl Cell {
    /// Whether the cell reads as occupied in the boolean grid view.
    pub fn is_occupied(self) -> bool {
        self != Cell::Open
    }
}

/// Occupancy grid for one flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatMap {
    capacity: usize,
    layout: CabinLayout,
    cells: Vec<Vec<Cell>>,
    available: usize,
}

impl SeatMap {
    /// Derives a fresh layout for the capacity with every seat open.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::InvalidInput` if `capacity` is zero or
    /// above [`CabinLayout::MAX_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(ReservationError::invalid_input("capacity")
                .with_reason("Capacity must be greater than zero"));
        }
        if capacity > CabinLayout::MAX_CAPACITY {
            return Err(ReservationError::invalid_input("capacity").with_reason(format!(
                "Capacity must be at most {}",
                CabinLayout::MAX_CAPACITY
            )));
        }

        let layout = CabinLayout::for_capacity(capacity);
        let per_row = layout.seat_columns();
        let remainder = capacity % per_row;
        let rows = capacity / per_row + usize::from(remainder > 0);

        let cells = (0..rows)
            .map(|row| {
                let mut seats_left = if remainder > 0 && row == rows - 1 {
                    remainder
                } else {
                    per_row
                };
                (0..layout.total_columns())
                    .map(|column| {
                        if layout.is_aisle(column) {
                            Cell::Aisle
                        } else if seats_left > 0 {
                            seats_left -= 1;
                            Cell::Open
                        } else {
                            Cell::Blocked
                        }
                    })
                    .collect()
            })
            .collect();

        let mut map = Self {
            capacity,
            layout,
            cells,
            available: 0,
        };
        map.trim_excess();
        map.available = map.count(Cell::Open);
        Ok(map)
    }

    /// Blocks open cells beyond capacity, last row and last column first.
    fn trim_excess(&mut self) {
        let mut excess = self.count(Cell::Open).saturating_sub(self.capacity);
        for cell in self.cells.iter_mut().rev().flat_map(|row| row.iter_mut().rev()) {
            if excess == 0 {
                break;
            }
            if *cell == Cell::Open {
                *cell = Cell::Blocked;
                excess -= 1;
            }
        }
    }

    fn count(&self, state: Cell) -> usize {
        self.cells.iter().flatten().filter(|&&cell| cell == state).count()
    }

    /// Total number of real seats.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of free seats.
    pub fn available_seats(&self) -> usize {
        self.available
    }

    /// Number of booked seats.
    pub fn booked_seats(&self) -> usize {
        self.capacity - self.available
    }

    /// Layout tier of the grid.
    pub fn layout(&self) -> CabinLayout {
        self.layout
    }

    /// Number of grid rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Grid width including aisles.
    pub fn columns(&self) -> usize {
        self.layout.total_columns()
    }

    /// The cell at a position, if it lies inside the grid.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .copied()
    }

    /// Iterates over the rows of the grid.
    pub fn grid(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Decodes a seat label into a grid position.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::InvalidSeatLabel` if the label is malformed
    /// and `ReservationError::SeatOutOfRange` if it lies outside the grid.
    pub fn locate(&self, label: &str) -> Result<Position> {
        let parsed: SeatLabel = label.parse()?;
        let position = parsed.position(self.layout);
        if self.cell(position).is_none() {
            return Err(ReservationError::SeatOutOfRange {
                label: parsed.to_string(),
            });
        }
        Ok(position)
    }

    /// Encodes a grid position as a seat label.
    ///
    /// Returns `None` for aisle columns and positions outside the grid.
    pub fn label_at(&self, position: Position) -> Option<String> {
        self.cell(position)?;
        SeatLabel::from_position(self.layout, position).map(|label| label.to_string())
    }

    /// Range and aisle validation shared by the label and position entry
    /// points.
    fn bookable_cell(&self, position: Position, label: &str) -> Result<Cell> {
        match self.cell(position) {
            None => Err(ReservationError::SeatOutOfRange {
                label: label.to_string(),
            }),
            Some(Cell::Aisle) => Err(ReservationError::AisleSeat {
                label: label.to_string(),
            }),
            Some(cell) => Ok(cell),
        }
    }

    fn display_name(&self, position: Position) -> String {
        self.label_at(position).unwrap_or_else(|| position.to_string())
    }

    /// Whether the seat is free.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the label is malformed, out of range or
    /// resolves to an aisle.
    pub fn is_available(&self, label: &str) -> Result<bool> {
        let position = self.locate(label)?;
        self.is_available_at(position)
    }

    /// Position-based form of [`SeatMap::is_available`].
    pub fn is_available_at(&self, position: Position) -> Result<bool> {
        let cell = self.bookable_cell(position, &self.display_name(position))?;
        Ok(cell == Cell::Open)
    }

    /// Like [`SeatMap::is_available`], but reports any failure as "not
    /// available".
    pub fn check_available(&self, label: &str) -> bool {
        match self.is_available(label) {
            Ok(available) => available,
            Err(e) => {
                warn!("Seat availability check failed: {e}");
                false
            }
        }
    }

    /// Books a free seat and returns its canonical label.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed, out-of-range or aisle
    /// labels, and `ReservationError::SeatUnavailable` if the seat is taken
    /// or not part of the cabin.
    pub fn book(&mut self, label: &str) -> Result<String> {
        let position = self.locate(label)?;
        self.book_at(position)
    }

    /// Position-based form of [`SeatMap::book`].
    pub fn book_at(&mut self, position: Position) -> Result<String> {
        let name = self.display_name(position);
        if self.bookable_cell(position, &name)? != Cell::Open {
            return Err(ReservationError::SeatUnavailable { label: name });
        }
        self.cells[position.row][position.column] = Cell::Booked;
        self.available -= 1;
        Ok(name)
    }

    /// Releases a booked seat and returns its canonical label.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed, out-of-range or aisle
    /// labels, and `ReservationError::SeatNotBooked` if the seat is free or
    /// not part of the cabin.
    pub fn cancel(&mut self, label: &str) -> Result<String> {
        let position = self.locate(label)?;
        self.cancel_at(position)
    }

    /// Position-based form of [`SeatMap::cancel`].
    pub fn cancel_at(&mut self, position: Position) -> Result<String> {
        let name = self.display_name(position);
        if self.bookable_cell(position, &name)? != Cell::Booked {
            return Err(ReservationError::SeatNotBooked { label: name });
        }
        self.cells[position.row][position.column] = Cell::Open;
        self.available += 1;
        Ok(name)
    }

    /// First free seat in row-major order.
    pub fn first_available(&self) -> Option<String> {
        self.cells.iter().enumerate().find_map(|(row, cells)| {
            cells
                .iter()
                .position(|&cell| cell == Cell::Open)
                .and_then(|column| self.label_at(Position::new(row, column)))
        })
    }

    /// Whether no seat is free.
    pub fn is_fully_booked(&self) -> bool {
        self.available == 0
    }

    /// Labels of every booked seat in row-major order.
    pub fn booked_labels(&self) -> Vec<String> {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .filter(|(_, cell)| **cell == Cell::Booked)
                    .map(move |(column, _)| Position::new(row, column))
            })
            .filter_map(|position| self.label_at(position))
            .collect()
    }

    /// Text view of the grid: `O` available, `X` occupied, `|` aisle.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

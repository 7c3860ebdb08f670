//! Seat labels such as `14C` and their grid coordinates.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::CabinLayout;
use crate::error::{ReservationError, Result};

/// A zero-based grid coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Human-facing seat identifier: a 1-based row number and a seat letter.
///
/// Parsing is case-insensitive; the letter is always stored uppercase, so
/// `"14c".parse()` displays as `14C`.
///
/// # Examples
///
/// ```rust
/// use jetway_core::seatmap::{CabinLayout, Position, SeatLabel};
///
/// let label: SeatLabel = "1h".parse().unwrap();
/// assert_eq!(label.to_string(), "1H");
/// assert_eq!(label.position(CabinLayout::WideBody), Position::new(0, 9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatLabel {
    row: u32,
    letter: char,
}

impl SeatLabel {
    /// Builds the label for a grid position, or `None` when the position is
    /// an aisle or outside the layout's columns.
    pub fn from_position(layout: CabinLayout, position: Position) -> Option<Self> {
        let offset = layout.offset_for_column(position.column)?;
        let row = u32::try_from(position.row + 1).ok()?;
        let letter = u8::try_from(offset)
            .ok()
            .and_then(|offset| b'A'.checked_add(offset))
            .filter(u8::is_ascii_uppercase)
            .map(char::from)?;
        Some(Self { row, letter })
    }

    /// 1-based row number.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Uppercase seat letter.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// 0-based offset of the letter (`A` = 0).
    pub fn letter_offset(&self) -> usize {
        usize::from(self.letter as u8 - b'A')
    }

    /// Grid coordinate of this label under the given layout.
    ///
    /// The result is not range checked; callers compare it with the grid
    /// dimensions.
    pub fn position(&self, layout: CabinLayout) -> Position {
        Position {
            row: self.row as usize - 1,
            column: layout.column_for_offset(self.letter_offset()),
        }
    }
}

impl FromStr for SeatLabel {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        if label.chars().count() < 2 {
            return Err(ReservationError::invalid_label(s, "expected a row number and a seat letter"));
        }

        let mut chars = label.chars();
        let letter = chars
            .next_back()
            .map(|c| c.to_ascii_uppercase())
            .filter(char::is_ascii_uppercase)
            .ok_or_else(|| ReservationError::invalid_label(s, "invalid column letter"))?;

        let prefix = chars.as_str();
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReservationError::invalid_label(s, "invalid row number"));
        }
        let row = prefix
            .parse::<u32>()
            .ok()
            .filter(|&row| row > 0)
            .ok_or_else(|| ReservationError::invalid_label(s, "row number must be a positive integer"))?;

        Ok(Self { row, letter })
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

impl Serialize for SeatLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_valid_labels() {
        let label: SeatLabel = "14C".parse().unwrap();
        assert_eq!(label.row(), 14);
        assert_eq!(label.letter(), 'C');
        assert_eq!(label.letter_offset(), 2);

        let lower: SeatLabel = "3b".parse().unwrap();
        assert_eq!(lower.to_string(), "3B");
    }

    #[test]
    fn test_parse_rejects_malformed_labels() {
        for bad in ["", "A", "7", "A1", "1-", "0A", "-1A", "1 A", "x2B", "12", "1É"] {
            let err = bad.parse::<SeatLabel>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "label {bad:?} should be rejected");
        }
    }

    #[test]
    fn test_position_scenarios() {
        let a: SeatLabel = "1A".parse().unwrap();
        assert_eq!(a.position(CabinLayout::Regional), Position::new(0, 0));

        let c: SeatLabel = "1C".parse().unwrap();
        assert_eq!(c.position(CabinLayout::Regional), Position::new(0, 3));

        let h: SeatLabel = "1H".parse().unwrap();
        assert_eq!(h.position(CabinLayout::WideBody), Position::new(0, 9));

        let d: SeatLabel = "12D".parse().unwrap();
        assert_eq!(d.position(CabinLayout::NarrowBody), Position::new(11, 4));
    }

    #[test]
    fn test_from_position_skips_aisles() {
        assert_eq!(SeatLabel::from_position(CabinLayout::Regional, Position::new(0, 2)), None);
        assert_eq!(SeatLabel::from_position(CabinLayout::WideBody, Position::new(4, 8)), None);
        assert_eq!(SeatLabel::from_position(CabinLayout::WideBody, Position::new(4, 11)), None);

        let label = SeatLabel::from_position(CabinLayout::WideBody, Position::new(4, 10)).unwrap();
        assert_eq!(label.to_string(), "5I");
    }
}

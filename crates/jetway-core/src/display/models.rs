//! Display implementations for domain models.
//!
//! Models render as markdown. The seat map renders as plain text and is
//! wrapped in a code fence when embedded in a flight.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Account, Flight, FlightStatus, Reservation, ReservationStatus, Role, WaitingList},
    seatmap::{CabinLayout, Cell, SeatMap},
};

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for CabinLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Column header, one line per row, then the legend:
///
/// ```text
///     A   B       C   D
///  1  O   X   |   O   O
///
/// Legend: O - Available, X - Occupied, | - Aisle
/// ```
impl fmt::Display for SeatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout();

        let mut header = String::from("    ");
        let mut letters = layout.seat_letters();
        for column in 0..layout.total_columns() {
            if layout.is_aisle(column) {
                header.push_str("    ");
            } else if let Some(letter) = letters.next() {
                header.push(letter);
                header.push_str("   ");
            }
        }
        writeln!(f, "{}", header.trim_end())?;

        for (index, row) in self.grid().enumerate() {
            let mut line = format!("{:>2}  ", index + 1);
            for cell in row {
                line.push_str(match cell {
                    Cell::Open => "O   ",
                    Cell::Aisle => "|   ",
                    Cell::Booked | Cell::Blocked => "X   ",
                });
            }
            writeln!(f, "{}", line.trim_end())?;
        }

        writeln!(f)?;
        writeln!(f, "Legend: O - Available, X - Occupied, | - Aisle")
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} {}", self.id, self.airline)?;
        writeln!(f)?;
        writeln!(f, "- Destination: {}", self.destination)?;
        writeln!(f, "- Plane: {}", self.plane_id)?;
        writeln!(f, "- Departure: {}", self.departure)?;
        writeln!(f, "- Arrival: {}", self.arrival)?;
        writeln!(f, "- Status: {}", self.status)?;
        writeln!(
            f,
            "- Seats: {} of {} available ({} cabin)",
            self.available_seats(),
            self.capacity(),
            self.seats.layout()
        )?;

        writeln!(f, "\n## Seat Map")?;
        writeln!(f)?;
        writeln!(f, "```text")?;
        write!(f, "{}", self.seats)?;
        writeln!(f, "```")
    }
}

impl Flight {
    /// Compact listing form, without the seat map.
    pub(crate) fn fmt_summary(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} {}: {}", self.id, self.airline, self.destination)?;
        writeln!(f)?;
        writeln!(f, "- Departure: {}", self.departure)?;
        writeln!(f, "- Arrival: {}", self.arrival)?;
        writeln!(f, "- Status: {}", self.status)?;
        if self.is_fully_booked() {
            writeln!(f, "- Seats: fully booked ({})", self.capacity())?;
        } else {
            writeln!(
                f,
                "- Seats: {}/{} available",
                self.available_seats(),
                self.capacity()
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} ({})", self.id, self.status)?;
        writeln!(f)?;
        writeln!(f, "- Passenger: {} ({})", self.passenger_name, self.username)?;
        writeln!(f, "- Flight: {} {}", self.flight_id, self.airline)?;
        writeln!(f, "- Destination: {}", self.destination)?;
        writeln!(f, "- Seat: {}", self.seat)?;
        if let Some(payment) = &self.payment {
            writeln!(f, "- Payment: {payment}")?;
        }
        if let Some(booked_at) = &self.booked_at {
            writeln!(f, "- Booked: {}", LocalDateTime(booked_at))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}**: {} ({})", self.username, self.name, self.role)
    }
}

impl fmt::Display for WaitingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Waiting list for {}", self.flight_id)?;
        writeln!(f)?;
        if self.is_empty() {
            return writeln!(f, "Nobody is waiting.");
        }
        for (position, passenger) in self.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({})",
                position + 1,
                passenger.passenger_name,
                passenger.username
            )?;
        }
        Ok(())
    }
}

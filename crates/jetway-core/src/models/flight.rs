//! Flight model definition.

use serde::Serialize;

use super::FlightStatus;
use crate::seatmap::SeatMap;

/// A scheduled flight and its seat map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Flight {
    /// Unique identifier, e.g. `FL10001`
    pub id: String,

    /// Operating airline
    pub airline: String,

    /// Aircraft registration or number
    pub plane_id: String,

    /// Route description, e.g. `Manila to Cebu`
    pub destination: String,

    /// Departure time as entered by the operator
    pub departure: String,

    /// Arrival time as entered by the operator
    pub arrival: String,

    /// Operational status
    pub status: FlightStatus,

    /// Seat occupancy
    pub seats: SeatMap,
}

impl Flight {
    /// Total bookable seats.
    pub fn capacity(&self) -> usize {
        self.seats.capacity()
    }

    /// Seats still free.
    pub fn available_seats(&self) -> usize {
        self.seats.available_seats()
    }

    /// Whether no seat is free.
    pub fn is_fully_booked(&self) -> bool {
        self.seats.is_fully_booked()
    }
}

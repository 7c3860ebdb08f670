//! Filter types for querying flights and reservations.

use super::{Flight, Reservation};

/// Filter options for listing flights.
#[derive(Debug, Clone, Default)]
pub struct FlightFilter {
    /// Destination contains this text (case-insensitive)
    pub destination: Option<String>,

    /// Airline matches exactly (case-insensitive)
    pub airline: Option<String>,
}

impl FlightFilter {
    /// Whether the flight passes every set criterion.
    pub fn matches(&self, flight: &Flight) -> bool {
        let destination_ok = self.destination.as_ref().map_or(true, |needle| {
            flight
                .destination
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let airline_ok = self
            .airline
            .as_ref()
            .map_or(true, |airline| flight.airline.eq_ignore_ascii_case(airline));
        destination_ok && airline_ok
    }
}

/// Filter options for listing reservations.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    /// Owned by this account
    pub username: Option<String>,

    /// Booked on this flight
    pub flight_id: Option<String>,
}

impl ReservationFilter {
    /// Whether the reservation passes every set criterion.
    pub fn matches(&self, reservation: &Reservation) -> bool {
        self.username
            .as_ref()
            .map_or(true, |username| &reservation.username == username)
            && self
                .flight_id
                .as_ref()
                .map_or(true, |flight_id| &reservation.flight_id == flight_id)
    }
}

//! Wrappers reporting the outcome of create, update and delete operations.

use std::fmt;

use crate::models::{Account, Flight, Reservation};

/// Outcome of an operation that created a resource.
///
/// A booking and a waiting-list promotion both create a [`Reservation`].
#[derive(Debug)]
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Flight> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created flight with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Reservation> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Booked seat {} on {} for {}",
            self.resource.seat, self.resource.flight_id, self.resource.passenger_name
        )?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CreateResult<Account> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Registered {} account '{}'",
            self.resource.role, self.resource.username
        )
    }
}

/// Outcome of an update, with the list of changes applied.
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Flight> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated flight with ID: {}", self.resource.id)?;

        if self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "No changes made.")?;
        } else {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of a removal.
#[derive(Debug)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Flight> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted flight {} ({}: {})",
            self.resource.id, self.resource.airline, self.resource.destination
        )
    }
}

impl fmt::Display for DeleteResult<Reservation> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Cancelled reservation {} (seat {} on {} released)",
            self.resource.id, self.resource.seat, self.resource.flight_id
        )
    }
}

impl fmt::Display for DeleteResult<Account> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted account '{}' ({})",
            self.resource.username, self.resource.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::FlightStatus, seatmap::SeatMap};

    fn flight() -> Flight {
        Flight {
            id: "FL10003".to_string(),
            airline: "AirAsia".to_string(),
            plane_id: "RP-C8972".to_string(),
            destination: "Cebu to Manila".to_string(),
            departure: "18:00".to_string(),
            arrival: "19:10".to_string(),
            status: FlightStatus::Boarding,
            seats: SeatMap::new(4).unwrap(),
        }
    }

    #[test]
    fn test_create_result_flight() {
        let output = CreateResult::new(flight()).to_string();
        assert!(output.starts_with("Created flight with ID: FL10003\n"));
        assert!(output.contains("## Seat Map"));
    }

    #[test]
    fn test_update_result_lists_changes() {
        let changes = vec!["Status: On Time -> Boarding".to_string()];
        let output = UpdateResult::with_changes(flight(), changes).to_string();
        assert!(output.contains("Changes made:\n- Status: On Time -> Boarding"));

        let output = UpdateResult::new(flight()).to_string();
        assert!(output.contains("No changes made."));
    }

    #[test]
    fn test_delete_result_flight() {
        let output = DeleteResult::new(flight()).to_string();
        assert_eq!(output, "Deleted flight FL10003 (AirAsia: Cebu to Manila)\n");
    }

    #[test]
    fn test_results_debug_format() {
        let debug = format!("{:?}", DeleteResult::new(flight()));
        assert!(debug.starts_with("DeleteResult"));
        assert!(debug.contains("FL10003"));

        let failed: Result<DeleteResult<Flight>, String> = Err("locked".to_string());
        assert_eq!(failed.unwrap_err(), "locked");

        let updated = format!("{:?}", UpdateResult::new(flight()));
        assert!(updated.contains("changes: []"));
    }
}

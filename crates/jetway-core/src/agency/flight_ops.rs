//! Flight catalog operations.

use log::info;

use super::{validate_text, Agency};
use crate::{
    display::{DeleteResult, Flights, UpdateResult},
    error::{ReservationError, Result},
    models::{Flight, FlightFilter, FlightStatus, WaitingList},
    params::{CreateFlight, UpdateFlight},
    seatmap::SeatMap,
    store,
};

impl Agency {
    /// Creates a flight with a fresh seat map and an empty waiting list.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::InvalidInput` if a text field is empty or
    /// contains a comma or line break, or if the capacity is zero.
    pub fn create_flight(&mut self, params: &CreateFlight) -> Result<Flight> {
        validate_text("airline", &params.airline)?;
        validate_text("plane", &params.plane_id)?;
        validate_text("destination", &params.destination)?;
        validate_text("departure", &params.departure)?;
        validate_text("arrival", &params.arrival)?;
        let seats = SeatMap::new(params.capacity)?;

        let flight = Flight {
            id: self.ids.next_flight(),
            airline: params.airline.trim().to_string(),
            plane_id: params.plane_id.trim().to_string(),
            destination: params.destination.trim().to_string(),
            departure: params.departure.trim().to_string(),
            arrival: params.arrival.trim().to_string(),
            status: FlightStatus::OnTime,
            seats,
        };
        info!(
            "Created flight {} with {} seats ({} cabin)",
            flight.id,
            flight.capacity(),
            flight.seats.layout()
        );

        self.waiting_lists
            .insert(flight.id.clone(), WaitingList::new(flight.id.as_str()));
        self.flights.push(flight.clone());
        self.save_flight_state(&flight.id)?;
        Ok(flight)
    }

    /// Flights matching the filter, in creation order.
    pub fn list_flights(&self, filter: &FlightFilter) -> Flights {
        Flights(
            self.flights
                .iter()
                .filter(|flight| filter.matches(flight))
                .cloned()
                .collect(),
        )
    }

    /// Looks up a flight by ID.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::FlightNotFound` if no flight has the ID.
    pub fn get_flight(&self, id: &str) -> Result<&Flight> {
        let index = self.flight_index(id)?;
        Ok(&self.flights[index])
    }

    /// Applies the set fields of `params` and reports what changed.
    ///
    /// Changing the capacity derives a new seat map, so it is only accepted
    /// while nobody holds a reservation on the flight.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::FlightNotFound` for an unknown flight and
    /// `ReservationError::InvalidInput` for invalid values or a capacity
    /// change on a flight with reservations. Nothing is changed on error.
    pub fn update_flight(&mut self, params: &UpdateFlight) -> Result<UpdateResult<Flight>> {
        let index = self.flight_index(&params.id)?;
        let text_fields = [
            ("airline", &params.airline),
            ("plane", &params.plane_id),
            ("destination", &params.destination),
            ("departure", &params.departure),
            ("arrival", &params.arrival),
        ];
        for (field, value) in text_fields {
            if let Some(value) = value {
                validate_text(field, value)?;
            }
        }

        let new_seats = match params.capacity {
            Some(capacity) if capacity != self.flights[index].capacity() => {
                if self.reservations.iter().any(|r| r.flight_id == params.id) {
                    return Err(ReservationError::invalid_input("capacity").with_reason(
                        "Cannot change the capacity of a flight that has reservations",
                    ));
                }
                Some(SeatMap::new(capacity)?)
            }
            _ => None,
        };

        let flight = &mut self.flights[index];
        let mut changes = Vec::new();
        let text_updates = [
            ("Airline", &mut flight.airline, &params.airline),
            ("Plane", &mut flight.plane_id, &params.plane_id),
            ("Destination", &mut flight.destination, &params.destination),
            ("Departure", &mut flight.departure, &params.departure),
            ("Arrival", &mut flight.arrival, &params.arrival),
        ];
        for (label, current, update) in text_updates {
            if let Some(value) = update.as_deref().map(str::trim) {
                if *current != value {
                    changes.push(format!("{label}: {current} -> {value}"));
                    *current = value.to_string();
                }
            }
        }
        if let Some(status) = params.status {
            if status != flight.status {
                changes.push(format!("Status: {} -> {}", flight.status, status));
                flight.status = status;
            }
        }
        if let Some(seats) = new_seats {
            changes.push(format!(
                "Capacity: {} -> {} ({} cabin)",
                flight.capacity(),
                seats.capacity(),
                seats.layout()
            ));
            flight.seats = seats;
        }

        let flight = flight.clone();
        if !changes.is_empty() {
            info!("Updated flight {}: {}", flight.id, changes.join("; "));
            self.save_flight_state(&flight.id)?;
        }
        Ok(UpdateResult::with_changes(flight, changes))
    }

    /// Removes a flight together with its reservations, waiting list and
    /// seat grid file.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::FlightNotFound` if no flight has the ID.
    pub fn delete_flight(&mut self, id: &str) -> Result<DeleteResult<Flight>> {
        let index = self.flight_index(id)?;
        let flight = self.flights.remove(index);

        let before = self.reservations.len();
        self.reservations.retain(|r| r.flight_id != flight.id);
        let removed = before - self.reservations.len();
        self.waiting_lists.remove(&flight.id);
        info!(
            "Deleted flight {} and {removed} reservation(s)",
            flight.id
        );

        self.save_flights()?;
        self.storage.delete(&store::seatmap_key(&flight.id))?;
        self.save_waiting_list(&flight.id)?;
        if removed > 0 {
            self.save_reservations()?;
        }
        Ok(DeleteResult::new(flight))
    }
}

//! Waiting list operations for fully booked flights.

use jiff::Timestamp;
use log::info;

use super::Agency;
use crate::{
    error::{ReservationError, Result},
    models::{Account, Reservation, ReservationStatus, WaitingList},
    params::Promote,
};

impl Agency {
    /// Queues the acting account for a fully booked flight.
    ///
    /// Returns the updated waiting list.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::FlightNotFound` for an unknown flight,
    /// `ReservationError::InvalidInput` while the flight still has free
    /// seats, and `ReservationError::AlreadyWaiting` if the account is
    /// queued already.
    pub fn join_waiting_list(&mut self, actor: &Account, flight_id: &str) -> Result<WaitingList> {
        let flight = self.get_flight(flight_id)?;
        if !flight.is_fully_booked() {
            return Err(ReservationError::invalid_input("flight").with_reason(format!(
                "Flight {} still has {} available seat(s); book a seat instead",
                flight.id,
                flight.available_seats()
            )));
        }

        let list = self.waiting_list_mut(flight_id);
        list.push(&actor.username, &actor.name)?;
        let list = list.clone();
        info!(
            "{} joined the waiting list for {} at position {}",
            actor.username,
            flight_id,
            list.len()
        );
        self.save_waiting_list(flight_id)?;
        Ok(list)
    }

    /// The waiting list of a flight, head first.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::FlightNotFound` for an unknown flight.
    pub fn waiting_list(&self, flight_id: &str) -> Result<WaitingList> {
        self.get_flight(flight_id)?;
        Ok(self
            .waiting_lists
            .get(flight_id)
            .cloned()
            .unwrap_or_else(|| WaitingList::new(flight_id)))
    }

    /// Books a seat for the passenger at the head of the waiting list.
    ///
    /// The seat is the requested one or the first free seat. The resulting
    /// reservation carries no payment.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::FlightNotFound` for an unknown flight,
    /// `ReservationError::FlightFullyBooked` when no seat is free,
    /// `ReservationError::WaitingListEmpty` when nobody is waiting, seat
    /// validation errors, and `ReservationError::SeatUnavailable` for a
    /// taken seat.
    pub fn promote(&mut self, params: &Promote) -> Result<Reservation> {
        let index = self.flight_index(&params.flight_id)?;
        let flight_id = self.flights[index].id.clone();
        if self.flights[index].is_fully_booked() {
            return Err(ReservationError::FlightFullyBooked { flight_id });
        }

        let passenger = self
            .waiting_lists
            .get(&flight_id)
            .and_then(WaitingList::front)
            .cloned()
            .ok_or_else(|| ReservationError::WaitingListEmpty {
                flight_id: flight_id.clone(),
            })?;

        let flight = &mut self.flights[index];
        let seat = match &params.seat {
            Some(seat) => flight.seats.book(seat)?,
            None => {
                let first = flight
                    .seats
                    .first_available()
                    .ok_or_else(|| ReservationError::FlightFullyBooked {
                        flight_id: flight_id.clone(),
                    })?;
                flight.seats.book(&first)?
            }
        };
        let reservation = Reservation {
            id: self.ids.next_reservation(),
            passenger_name: passenger.passenger_name.clone(),
            flight_id: flight.id.clone(),
            airline: flight.airline.clone(),
            destination: flight.destination.clone(),
            seat,
            status: ReservationStatus::Confirmed,
            username: passenger.username.clone(),
            payment: None,
            booked_at: Some(Timestamp::now()),
        };
        self.waiting_list_mut(&flight_id).pop_front();
        info!(
            "Promoted {} from the waiting list of {} to seat {}",
            reservation.username, flight_id, reservation.seat
        );

        self.reservations.push(reservation.clone());
        self.save_flight_state(&flight_id)?;
        self.save_reservations()?;
        self.save_waiting_list(&flight_id)?;
        Ok(reservation)
    }

    /// Takes a user off a flight's waiting list.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::FlightNotFound` for an unknown flight and
    /// `ReservationError::NotWaiting` if the user is not queued.
    pub fn remove_from_waiting_list(&mut self, flight_id: &str, username: &str) -> Result<()> {
        self.get_flight(flight_id)?;
        if !self.waiting_list_mut(flight_id).remove(username) {
            return Err(ReservationError::NotWaiting {
                flight_id: flight_id.to_string(),
                username: username.to_string(),
            });
        }
        info!("Removed {username} from the waiting list of {flight_id}");
        self.save_waiting_list(flight_id)
    }
}

//! Reservation ledger operations: booking, cancellation and listing.

use jiff::Timestamp;
use log::{info, warn};

use super::Agency;
use crate::{
    display::{DeleteResult, Reservations},
    error::{ReservationError, Result},
    models::{Account, Reservation, ReservationFilter, ReservationStatus},
    params::BookSeat,
    payment::FARE,
};

impl Agency {
    /// Books a seat for the acting account and charges the fare.
    ///
    /// Without an explicit seat the first free seat is taken. The seat is
    /// checked before the payment is processed, so an unavailable seat is
    /// never charged.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::FlightNotFound` for an unknown flight,
    /// `ReservationError::FlightFullyBooked` when no seat is free (the caller
    /// may join the waiting list instead), seat validation errors,
    /// `ReservationError::SeatUnavailable` for a taken seat, and
    /// `ReservationError::InvalidInput` for rejected payment details.
    pub fn book_seat(&mut self, actor: &Account, params: &BookSeat) -> Result<Reservation> {
        let index = self.flight_index(&params.flight_id)?;
        let flight = &self.flights[index];

        let full = || ReservationError::FlightFullyBooked {
            flight_id: flight.id.clone(),
        };
        if flight.is_fully_booked() {
            return Err(full());
        }
        let requested = match &params.seat {
            Some(seat) => seat.clone(),
            None => flight.seats.first_available().ok_or_else(full)?,
        };
        if !flight.seats.is_available(&requested)? {
            let position = flight.seats.locate(&requested)?;
            return Err(ReservationError::SeatUnavailable {
                label: flight
                    .seats
                    .label_at(position)
                    .unwrap_or_else(|| requested.clone()),
            });
        }

        let receipt = params.payment.process(FARE)?;

        let id = self.ids.next_reservation();
        let flight = &mut self.flights[index];
        let seat = flight.seats.book(&requested)?;
        let reservation = Reservation {
            id,
            passenger_name: actor.name.clone(),
            flight_id: flight.id.clone(),
            airline: flight.airline.clone(),
            destination: flight.destination.clone(),
            seat,
            status: ReservationStatus::Confirmed,
            username: actor.username.clone(),
            payment: Some(receipt.description.clone()),
            booked_at: Some(Timestamp::now()),
        };
        info!(
            "Booked seat {} on {} for {} ({receipt})",
            reservation.seat, reservation.flight_id, reservation.username
        );

        self.reservations.push(reservation.clone());
        self.save_flight_state(&reservation.flight_id)?;
        self.save_reservations()?;
        Ok(reservation)
    }

    /// Cancels a reservation and releases its seat.
    ///
    /// Customers can only cancel their own reservations; admins can cancel
    /// any.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::ReservationNotFound` if the reservation
    /// does not exist or belongs to another customer.
    pub fn cancel_reservation(
        &mut self,
        actor: &Account,
        id: &str,
    ) -> Result<DeleteResult<Reservation>> {
        let index = self.reservation_index(id)?;
        if !actor.is_admin() && self.reservations[index].username != actor.username {
            return Err(ReservationError::ReservationNotFound { id: id.to_string() });
        }

        let reservation = self.reservations.remove(index);
        let released = self.release_seat(&reservation);
        info!(
            "Cancelled reservation {} (seat {} on {})",
            reservation.id, reservation.seat, reservation.flight_id
        );

        if released {
            self.save_flight_state(&reservation.flight_id)?;
        }
        self.save_reservations()?;
        Ok(DeleteResult::new(reservation))
    }

    /// Reservations matching the filter, in booking order.
    pub fn list_reservations(&self, filter: &ReservationFilter) -> Reservations {
        Reservations(
            self.reservations
                .iter()
                .filter(|reservation| filter.matches(reservation))
                .cloned()
                .collect(),
        )
    }

    /// Looks up a reservation by ID.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::ReservationNotFound` if no reservation has
    /// the ID.
    pub fn get_reservation(&self, id: &str) -> Result<&Reservation> {
        let index = self.reservation_index(id)?;
        Ok(&self.reservations[index])
    }

    /// Frees the seat held by a reservation that is being removed.
    ///
    /// Returns whether a seat map changed. A seat that cannot be released
    /// is logged; the reservation is removed regardless.
    pub(crate) fn release_seat(&mut self, reservation: &Reservation) -> bool {
        let flight = match self.flight_mut(&reservation.flight_id) {
            Ok(flight) => flight,
            Err(e) => {
                warn!("Reservation {}: {e}", reservation.id);
                return false;
            }
        };
        match flight.seats.cancel(&reservation.seat) {
            Ok(_) => true,
            Err(e) => {
                warn!("Reservation {}: {e}", reservation.id);
                false
            }
        }
    }
}

//! The [`Agency`] application context.
//!
//! An agency owns every collection (flights with their seat maps,
//! reservations, waiting lists and accounts) together with the storage
//! they are persisted to. Operations that change state take `&mut self`
//! and write the affected files before returning, so a fresh agency built
//! over the same storage sees the change.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │     Agency      │    │     Storage     │
//! │ (flight_ops,    │───▶│  (owned state,  │───▶│  (flat files /  │
//! │  ledger, ...)   │    │   seat maps)    │    │    in memory)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Role checks for administrative operations happen where credentials are
//! checked (see [`Agency::authenticate`]); operations whose outcome depends
//! on who is asking, such as cancelling a reservation, take the acting
//! [`Account`].
//!
//! # Examples
//!
//! ```rust
//! use jetway_core::{
//!     AgencyBuilder, MemoryStorage,
//!     params::{BookSeat, CreateFlight, Register},
//!     models::Role,
//!     payment::PaymentMethod,
//! };
//!
//! let mut agency = AgencyBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .build()?;
//!
//! let flight = agency.create_flight(&CreateFlight {
//!     airline: "Cebu Pacific".to_string(),
//!     plane_id: "RP-C7261".to_string(),
//!     capacity: 4,
//!     destination: "Manila to Cebu".to_string(),
//!     departure: "08:15".to_string(),
//!     arrival: "09:30".to_string(),
//! })?;
//!
//! let maria = agency.register(&Register {
//!     username: "maria".to_string(),
//!     password: "s3cret".to_string(),
//!     name: "Maria Santos".to_string(),
//!     role: Role::Customer,
//! })?;
//!
//! let reservation = agency.book_seat(&maria, &BookSeat {
//!     flight_id: flight.id.clone(),
//!     seat: Some("1c".to_string()),
//!     payment: PaymentMethod::GCash { number: "09171234321".to_string() },
//! })?;
//! assert_eq!(reservation.seat, "1C");
//! assert_eq!(agency.get_flight(&flight.id)?.available_seats(), 3);
//! # Ok::<(), jetway_core::ReservationError>(())
//! ```

use std::collections::BTreeMap;

pub mod account_ops;
pub mod builder;
pub mod flight_ops;
mod ids;
mod persistence;
pub mod reservation_ops;
pub mod waitlist_ops;

#[cfg(test)]
mod tests;

pub use builder::AgencyBuilder;

use self::ids::IdGenerator;
use crate::{
    error::{ReservationError, Result},
    models::{Account, Flight, Reservation, WaitingList},
    store::Storage,
};

/// Owned application state plus its storage handle.
pub struct Agency {
    storage: Box<dyn Storage>,
    flights: Vec<Flight>,
    reservations: Vec<Reservation>,
    waiting_lists: BTreeMap<String, WaitingList>,
    accounts: Vec<Account>,
    ids: IdGenerator,
}

impl std::fmt::Debug for Agency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agency")
            .field("flights", &self.flights)
            .field("reservations", &self.reservations)
            .field("waiting_lists", &self.waiting_lists)
            .field("accounts", &self.accounts)
            .field("ids", &self.ids)
            .finish_non_exhaustive()
    }
}

impl Agency {
    fn flight_index(&self, id: &str) -> Result<usize> {
        self.flights
            .iter()
            .position(|flight| flight.id == id)
            .ok_or_else(|| ReservationError::FlightNotFound { id: id.to_string() })
    }

    fn flight_mut(&mut self, id: &str) -> Result<&mut Flight> {
        let index = self.flight_index(id)?;
        Ok(&mut self.flights[index])
    }

    fn reservation_index(&self, id: &str) -> Result<usize> {
        self.reservations
            .iter()
            .position(|reservation| reservation.id == id)
            .ok_or_else(|| ReservationError::ReservationNotFound { id: id.to_string() })
    }

    fn account_index(&self, username: &str) -> Result<usize> {
        self.accounts
            .iter()
            .position(|account| account.username == username)
            .ok_or_else(|| ReservationError::AccountNotFound {
                username: username.to_string(),
            })
    }

    fn waiting_list_mut(&mut self, flight_id: &str) -> &mut WaitingList {
        self.waiting_lists
            .entry(flight_id.to_string())
            .or_insert_with(|| WaitingList::new(flight_id))
    }
}

/// Rejects empty text and text that would break the comma-separated
/// record files.
pub(crate) fn validate_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReservationError::invalid_input(field).with_reason("Must not be empty"));
    }
    if value.contains(|c| matches!(c, ',' | '\n' | '\r')) {
        return Err(ReservationError::invalid_input(field)
            .with_reason("Must not contain commas or line breaks"));
    }
    Ok(())
}

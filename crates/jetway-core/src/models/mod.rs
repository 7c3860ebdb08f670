//! Data models for flights, reservations, waiting lists and accounts.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping presentation apart from the data
//! structures.

pub mod account;
pub mod filters;
pub mod flight;
pub mod reservation;
pub mod status;
pub mod waiting;


pub use account::Account;
pub use filters::{FlightFilter, ReservationFilter};
pub use flight::Flight;
pub use reservation::Reservation;
pub use status::{FlightStatus, ReservationStatus, Role};
pub use waiting::{WaitingList, WaitingPassenger};

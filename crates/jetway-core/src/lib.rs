//! Core library for the Jetway airline reservation manager.
//!
//! The heart of the crate is the seat map engine ([`seatmap`]): it derives a
//! cabin grid from a flight's capacity, translates seat labels such as `14C`
//! to grid coordinates, books and releases seats, and encodes the grid as
//! text. Around it sit the domain models, simulated payment, flat-file
//! storage and the [`Agency`] application context that ties them together.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): implement [`std::fmt::Display`] as
//!   markdown
//! - **Display Wrappers** ([`display`]): collections and operation results
//! - **Terminal Rendering**: done by the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use jetway_core::{AgencyBuilder, MemoryStorage, params::CreateFlight};
//!
//! let mut agency = AgencyBuilder::new()
//!     .with_storage(MemoryStorage::new())
//!     .build()?;
//!
//! let flight = agency.create_flight(&CreateFlight {
//!     airline: "PAL".to_string(),
//!     plane_id: "RP-C3441".to_string(),
//!     capacity: 200,
//!     destination: "Manila to Davao".to_string(),
//!     departure: "13:00".to_string(),
//!     arrival: "14:45".to_string(),
//! })?;
//!
//! assert_eq!(flight.seats.locate("1H")?.column, 9);
//! println!("{}", flight.seats);
//! # Ok::<(), jetway_core::ReservationError>(())
//! ```

pub mod agency;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod payment;
pub mod seatmap;
pub mod store;

// Re-export commonly used types
pub use agency::{Agency, AgencyBuilder};
pub use display::{
    Accounts, CreateResult, DeleteResult, Flights, LocalDateTime, OperationStatus, Reservations,
    UpdateResult,
};
pub use error::{ErrorKind, ReservationError, Result};
pub use models::{
    Account, Flight, FlightFilter, FlightStatus, Reservation, ReservationFilter,
    ReservationStatus, Role, WaitingList, WaitingPassenger,
};
pub use params::{BookSeat, CreateFlight, Credentials, Promote, Register, UpdateFlight};
pub use payment::{PaymentMethod, Receipt, FARE};
pub use seatmap::{CabinLayout, Cell, Position, Restored, SeatLabel, SeatMap};
pub use store::{FileStorage, MemoryStorage, Storage};

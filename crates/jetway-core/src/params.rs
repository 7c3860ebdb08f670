//! Parameter structures for agency operations.
//!
//! These carry only serde derives; the CLI wraps them in clap argument
//! structs and converts with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │     Agency      │
//! │  (clap derives) │───▶│ (serde derives) │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    models::{FlightStatus, Role},
    payment::PaymentMethod,
};

/// Parameters for creating a flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFlight {
    /// Operating airline
    pub airline: String,

    /// Aircraft registration or number
    pub plane_id: String,

    /// Number of bookable seats
    pub capacity: usize,

    /// Route description
    pub destination: String,

    /// Departure time
    pub departure: String,

    /// Arrival time
    pub arrival: String,
}

/// Parameters for updating a flight; unset fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFlight {
    /// Flight to update
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plane_id: Option<String>,

    /// New capacity; only accepted while the flight has no reservations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FlightStatus>,
}

/// Parameters for booking a seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSeat {
    /// Flight to book on
    pub flight_id: String,

    /// Seat label; the first free seat when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,

    /// How the fare is paid
    pub payment: PaymentMethod,
}

/// Parameters for promoting the head of a waiting list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Promote {
    /// Flight whose waiting list is served
    pub flight_id: String,

    /// Seat label; the first free seat when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat: Option<String>,
}

/// Parameters for registering an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Register {
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

/// Login credentials and the role the caller expects to act as.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub role: Role,
}

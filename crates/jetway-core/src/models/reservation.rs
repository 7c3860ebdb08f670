//! Reservation model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ReservationStatus;

/// A passenger bound to a seat on a flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reservation {
    /// Unique identifier, e.g. `RES10001`
    pub id: String,

    /// Name printed on the booking
    pub passenger_name: String,

    /// Flight the seat belongs to
    pub flight_id: String,

    /// Airline at booking time
    pub airline: String,

    /// Destination at booking time
    pub destination: String,

    /// Canonical seat label, e.g. `14C`
    pub seat: String,

    /// Reservation status
    #[serde(default)]
    pub status: ReservationStatus,

    /// Account that owns the reservation
    pub username: String,

    /// Masked payment description; absent for waiting-list promotions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<String>,

    /// When the seat was booked (UTC); absent on older records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booked_at: Option<Timestamp>,
}

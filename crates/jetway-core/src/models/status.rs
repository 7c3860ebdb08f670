//! Status enumerations for flights, reservations and accounts.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Operational status of a flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlightStatus {
    /// Scheduled and on time
    #[default]
    OnTime,

    /// Running behind schedule
    Delayed,

    /// Passengers are boarding
    Boarding,

    /// Left the gate
    Departed,

    /// Reached the destination
    Arrived,

    /// Will not operate
    Cancelled,
}

impl FromStr for FlightStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "ontime" => Ok(FlightStatus::OnTime),
            "delayed" => Ok(FlightStatus::Delayed),
            "boarding" => Ok(FlightStatus::Boarding),
            "departed" => Ok(FlightStatus::Departed),
            "arrived" => Ok(FlightStatus::Arrived),
            "cancelled" | "canceled" => Ok(FlightStatus::Cancelled),
            _ => Err(format!("Invalid flight status: {s}")),
        }
    }
}

impl FlightStatus {
    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FlightStatus::OnTime => "On Time",
            FlightStatus::Delayed => "Delayed",
            FlightStatus::Boarding => "Boarding",
            FlightStatus::Departed => "Departed",
            FlightStatus::Arrived => "Arrived",
            FlightStatus::Cancelled => "Cancelled",
        }
    }
}

/// Status of a reservation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Seat is held for the passenger
    #[default]
    Confirmed,
}

impl FromStr for ReservationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "confirmed" => Ok(ReservationStatus::Confirmed),
            _ => Err(format!("Invalid reservation status: {s}")),
        }
    }
}

impl ReservationStatus {
    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "Confirmed",
        }
    }
}

/// Account role; decides which operations a user may run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages flights, reservations, waiting lists and accounts
    Admin,

    /// Books and cancels their own reservations
    #[default]
    Customer,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "customer" => Ok(Role::Customer),
            _ => Err(format!("Invalid role: {s}")),
        }
    }
}

impl Role {
    /// Convert to the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }
}

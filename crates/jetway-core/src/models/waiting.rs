//! Waiting list model definition.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::error::{ReservationError, Result};

/// A passenger queued for a fully booked flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaitingPassenger {
    /// Account that joined the queue
    pub username: String,

    /// Name to book the seat under
    pub passenger_name: String,
}

/// First-in, first-out queue of passengers for one flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaitingList {
    /// Flight the queue belongs to
    pub flight_id: String,

    passengers: VecDeque<WaitingPassenger>,
}

impl WaitingList {
    /// Creates an empty waiting list.
    pub fn new(flight_id: impl Into<String>) -> Self {
        Self {
            flight_id: flight_id.into(),
            passengers: VecDeque::new(),
        }
    }

    /// Appends a passenger to the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::AlreadyWaiting` if the user is queued
    /// already.
    pub fn push(&mut self, username: &str, passenger_name: &str) -> Result<()> {
        if self.contains(username) {
            return Err(ReservationError::AlreadyWaiting {
                flight_id: self.flight_id.clone(),
                username: username.to_string(),
            });
        }
        self.passengers.push_back(WaitingPassenger {
            username: username.to_string(),
            passenger_name: passenger_name.to_string(),
        });
        Ok(())
    }

    /// Removes the first entry for the user; returns whether one was found.
    pub fn remove(&mut self, username: &str) -> bool {
        match self.passengers.iter().position(|p| p.username == username) {
            Some(index) => {
                self.passengers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Passenger at the head of the queue.
    pub fn front(&self) -> Option<&WaitingPassenger> {
        self.passengers.front()
    }

    /// Removes and returns the passenger at the head of the queue.
    pub fn pop_front(&mut self) -> Option<WaitingPassenger> {
        self.passengers.pop_front()
    }

    /// Whether the user is queued.
    pub fn contains(&self, username: &str) -> bool {
        self.passengers.iter().any(|p| p.username == username)
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    /// Queued passengers, head first.
    pub fn iter(&self) -> impl Iterator<Item = &WaitingPassenger> {
        self.passengers.iter()
    }
}

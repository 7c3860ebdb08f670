//! Newtype wrappers for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::models::{Account, Flight, Reservation};

/// Flights as a compact listing, without seat maps.
///
/// # Examples
///
/// ```rust
/// use jetway_core::display::Flights;
///
/// let flights = Flights(vec![]);
/// assert_eq!(flights.to_string(), "No flights found.\n");
/// ```
pub struct Flights(pub Vec<Flight>);

impl Flights {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&Flight> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Flight> {
        self.0.iter()
    }
}

impl Index<usize> for Flights {
    type Output = Flight;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Flights {
    type Item = Flight;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Flights {
    type Item = &'a Flight;
    type IntoIter = std::slice::Iter<'a, Flight>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Flights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No flights found.");
        }
        for flight in &self.0 {
            flight.fmt_summary(f)?;
        }
        Ok(())
    }
}

/// Reservations, one section each.
pub struct Reservations(pub Vec<Reservation>);

impl Reservations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reservation> {
        self.0.iter()
    }
}

impl IntoIterator for Reservations {
    type Item = Reservation;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for Reservations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No reservations found.");
        }
        for reservation in &self.0 {
            write!(f, "{reservation}")?;
        }
        Ok(())
    }
}

/// Accounts as a bullet list.
pub struct Accounts(pub Vec<Account>);

impl Accounts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Account> {
        self.0.iter()
    }
}

impl fmt::Display for Accounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No accounts found.");
        }
        for account in &self.0 {
            write!(f, "{account}")?;
        }
        Ok(())
    }
}

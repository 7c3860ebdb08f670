//! Account store operations.

use std::collections::BTreeSet;

use log::info;

use super::{validate_text, Agency};
use crate::{
    display::{Accounts, DeleteResult},
    error::{ReservationError, Result},
    models::{Account, Reservation, Role},
    params::{Credentials, Register},
};

impl Agency {
    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::InvalidInput` if a field is empty or
    /// contains a comma or line break, or if the username is taken.
    pub fn register(&mut self, params: &Register) -> Result<Account> {
        validate_text("username", &params.username)?;
        validate_text("password", &params.password)?;
        validate_text("name", &params.name)?;

        let username = params.username.trim();
        if self.accounts.iter().any(|account| account.username == username) {
            return Err(ReservationError::invalid_input("username")
                .with_reason(format!("Username '{username}' already exists")));
        }

        let account = Account {
            username: username.to_string(),
            password: params.password.clone(),
            name: params.name.trim().to_string(),
            role: params.role,
        };
        info!("Registered {} account {}", account.role, account.username);
        self.accounts.push(account.clone());
        self.save_accounts()?;
        Ok(account)
    }

    /// Checks credentials against an account of the expected role.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::AuthenticationFailed` if no account of that
    /// role matches the username and password.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<Account> {
        self.accounts
            .iter()
            .find(|account| {
                account.username == credentials.username
                    && account.password == credentials.password
                    && account.role == credentials.role
            })
            .cloned()
            .ok_or(ReservationError::AuthenticationFailed)
    }

    /// Accounts, optionally restricted to one role, in registration order.
    pub fn list_accounts(&self, role: Option<Role>) -> Accounts {
        Accounts(
            self.accounts
                .iter()
                .filter(|account| role.map_or(true, |role| account.role == role))
                .cloned()
                .collect(),
        )
    }

    /// Deletes a customer account along with its reservations and
    /// waiting-list entries. Seats held by the reservations are released.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::AccountNotFound` for an unknown username
    /// and `ReservationError::InvalidInput` for admin accounts.
    pub fn delete_account(&mut self, username: &str) -> Result<DeleteResult<Account>> {
        let index = self.account_index(username)?;
        if self.accounts[index].is_admin() {
            return Err(ReservationError::invalid_input("username")
                .with_reason("Only customer accounts can be deleted"));
        }
        let account = self.accounts.remove(index);

        let (owned, kept): (Vec<Reservation>, Vec<Reservation>) = std::mem::take(&mut self.reservations)
            .into_iter()
            .partition(|reservation| reservation.username == account.username);
        self.reservations = kept;

        let mut changed_flights = BTreeSet::new();
        for reservation in &owned {
            if self.release_seat(reservation) {
                changed_flights.insert(reservation.flight_id.clone());
            }
        }

        let changed_lists: Vec<String> = self
            .waiting_lists
            .iter_mut()
            .filter_map(|(flight_id, list)| list.remove(&account.username).then(|| flight_id.clone()))
            .collect();

        info!(
            "Deleted account {} ({} reservation(s) released, removed from {} waiting list(s))",
            account.username,
            owned.len(),
            changed_lists.len()
        );

        self.save_accounts()?;
        if !owned.is_empty() {
            self.save_reservations()?;
        }
        for flight_id in &changed_flights {
            self.save_seatmap(flight_id)?;
        }
        if !changed_flights.is_empty() {
            self.save_flights()?;
        }
        for flight_id in &changed_lists {
            self.save_waiting_list(flight_id)?;
        }
        Ok(DeleteResult::new(account))
    }
}

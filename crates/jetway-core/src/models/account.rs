//! Account model definition.

use serde::{Deserialize, Serialize};

use super::Role;

/// A registered user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    /// Login name, unique across all roles
    pub username: String,

    /// Login secret
    #[serde(skip_serializing)]
    pub password: String,

    /// Display name, also used as the passenger name on bookings
    pub name: String,

    /// Admin or customer
    pub role: Role,
}

impl Account {
    /// Whether the account may run administrative operations.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

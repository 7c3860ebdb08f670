//! Simulated payment processing.
//!
//! No external service is contacted. A payment method is validated, and on
//! success a [`Receipt`] with a masked description of the method is issued,
//! which is what gets stored on the reservation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ReservationError, Result};

/// Fare charged for every seat, in centavos (PHP 500.00).
pub const FARE: u64 = 50_000;

const CENTAVOS_PER_PESO: u64 = 100;

/// Digits kept visible when masking an account or card number.
const VISIBLE_DIGITS: usize = 4;

/// How a passenger pays for a seat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Mobile wallet identified by phone number
    GCash { number: String },

    /// Credit or debit card
    Card {
        number: String,
        /// `MM/YY`
        expiry: String,
        cvv: String,
    },
}

/// Proof of a processed payment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Receipt {
    /// Masked method, e.g. `Card (****4242)`
    pub description: String,

    /// Amount charged, in centavos
    pub amount: u64,
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02} paid via {}",
            self.amount / CENTAVOS_PER_PESO,
            self.amount % CENTAVOS_PER_PESO,
            self.description
        )
    }
}

impl PaymentMethod {
    /// Validates the method and charges `amount` centavos.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::InvalidInput` naming the offending field
    /// when a number is not all digits or shorter than four digits, the
    /// expiry is not `MM/YY` with a month from 01 to 12, the CVV is not
    /// three or four digits, or the amount is zero.
    pub fn process(&self, amount: u64) -> Result<Receipt> {
        if amount == 0 {
            return Err(ReservationError::invalid_input("amount")
                .with_reason("Amount must be greater than zero"));
        }

        let description = match self {
            PaymentMethod::GCash { number } => {
                validate_number("gcash number", number)?;
                format!("GCash ({})", mask(number))
            }
            PaymentMethod::Card {
                number,
                expiry,
                cvv,
            } => {
                validate_number("card number", number)?;
                validate_expiry(expiry)?;
                if !(3..=4).contains(&cvv.len()) || !is_digits(cvv) {
                    return Err(ReservationError::invalid_input("cvv")
                        .with_reason("CVV must be 3 or 4 digits"));
                }
                format!("Card ({})", mask(number))
            }
        };

        Ok(Receipt {
            description,
            amount,
        })
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn validate_number(field: &str, number: &str) -> Result<()> {
    if !is_digits(number) {
        return Err(ReservationError::invalid_input(field).with_reason("Must contain only digits"));
    }
    if number.len() < VISIBLE_DIGITS {
        return Err(ReservationError::invalid_input(field)
            .with_reason(format!("Must be at least {VISIBLE_DIGITS} digits")));
    }
    Ok(())
}

fn validate_expiry(expiry: &str) -> Result<()> {
    let invalid = || ReservationError::invalid_input("expiry").with_reason("Expected MM/YY");
    let (month, year) = expiry.split_once('/').ok_or_else(invalid)?;
    if month.len() != 2 || year.len() != 2 || !is_digits(month) || !is_digits(year) {
        return Err(invalid());
    }
    match month.parse::<u8>() {
        Ok(1..=12) => Ok(()),
        _ => Err(invalid()),
    }
}

fn mask(number: &str) -> String {
    let tail = &number[number.len() - VISIBLE_DIGITS..];
    format!("****{tail}")
}

//! Error types for the reservation library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all reservation operations.
#[derive(Error, Debug)]
pub enum ReservationError {
    /// Seat label could not be parsed
    #[error("Invalid seat label '{label}': {reason}")]
    InvalidSeatLabel { label: String, reason: String },
    /// Seat label parsed but points outside the cabin grid
    #[error("Seat {label} is out of range for this cabin")]
    SeatOutOfRange { label: String },
    /// Seat label resolves to an aisle column
    #[error("Seat {label} resolves to an aisle")]
    AisleSeat { label: String },
    /// Seat is occupied or not part of the cabin
    #[error("Seat {label} is not available")]
    SeatUnavailable { label: String },
    /// Cancelling a seat that holds no booking
    #[error("Seat {label} is not booked")]
    SeatNotBooked { label: String },
    /// Stored seat grid could not be parsed
    #[error("Invalid seat grid at line {line}: {reason}")]
    InvalidGrid { line: usize, reason: String },
    /// Flight has no open seats left
    #[error("Flight {flight_id} is fully booked")]
    FlightFullyBooked { flight_id: String },
    /// Flight not found for the given ID
    #[error("Flight with ID {id} not found")]
    FlightNotFound { id: String },
    /// Reservation not found for the given ID
    #[error("Reservation with ID {id} not found")]
    ReservationNotFound { id: String },
    /// Account not found for the given username
    #[error("Account '{username}' not found")]
    AccountNotFound { username: String },
    /// Nobody is queued for the flight
    #[error("Waiting list for flight {flight_id} is empty")]
    WaitingListEmpty { flight_id: String },
    /// User already queued for the flight
    #[error("'{username}' is already on the waiting list for flight {flight_id}")]
    AlreadyWaiting { flight_id: String, username: String },
    /// User is not queued for the flight
    #[error("'{username}' is not on the waiting list for flight {flight_id}")]
    NotWaiting { flight_id: String, username: String },
    /// Credentials did not match an account of the requested role
    #[error("Invalid username, password or account type")]
    AuthenticationFailed,
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Broad classification of [`ReservationError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input, out-of-range coordinates, aisle-targeting operations
    Validation,
    /// Booking an unavailable seat, cancelling a free seat, full flights
    Booking,
    /// Referenced flight, reservation or account does not exist
    NotFound,
    /// Storage and environment failures
    Storage,
}

impl ReservationError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a seat label error for the given label.
    pub fn invalid_label(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSeatLabel {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSeatLabel { .. }
            | Self::SeatOutOfRange { .. }
            | Self::AisleSeat { .. }
            | Self::InvalidGrid { .. }
            | Self::InvalidInput { .. }
            | Self::AuthenticationFailed => ErrorKind::Validation,
            Self::SeatUnavailable { .. }
            | Self::SeatNotBooked { .. }
            | Self::FlightFullyBooked { .. }
            | Self::WaitingListEmpty { .. }
            | Self::AlreadyWaiting { .. } => ErrorKind::Booking,
            Self::FlightNotFound { .. }
            | Self::ReservationNotFound { .. }
            | Self::AccountNotFound { .. }
            | Self::NotWaiting { .. } => ErrorKind::NotFound,
            Self::FileSystem { .. } | Self::XdgDirectory(_) => ErrorKind::Storage,
        }
    }

    /// Whether this is a validation failure.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }

    /// Whether this is a booking failure.
    pub fn is_booking(&self) -> bool {
        self.kind() == ErrorKind::Booking
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ReservationError {
        ReservationError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

/// Extension trait for mapping I/O results onto [`ReservationError`].
pub trait IoResultExt<T> {
    /// Attach the path the failed operation was working on.
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| ReservationError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for reservation operations
pub type Result<T> = std::result::Result<T, ReservationError>;

//! Display formatting for domain models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]),
//! producing markdown suitable for the terminal renderer. Collections are
//! wrapped in newtypes so empty results read naturally, and create, update
//! and delete operations are reported through result wrappers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Collections &   │    │   Markdown      │
//! │ (Flight, Seats) │───▶│ Result Wrappers │───▶│    Output       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust
//! use jetway_core::{
//!     display::{CreateResult, OperationStatus},
//!     models::{Account, Role},
//! };
//!
//! let account = Account {
//!     username: "maria".to_string(),
//!     password: "s3cret".to_string(),
//!     name: "Maria Santos".to_string(),
//!     role: Role::Customer,
//! };
//!
//! let output = CreateResult::new(account).to_string();
//! assert!(output.contains("Registered customer account 'maria'"));
//!
//! let status = OperationStatus::success("Seat released".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Accounts, Flights, Reservations};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;

//! Command-line argument definitions.
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types with `From`, keeping clap out of `jetway-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Agency
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jetway_core::{
    models::{FlightFilter, FlightStatus, Role},
    params::{BookSeat, CreateFlight, Promote, UpdateFlight},
    payment::PaymentMethod,
};

/// Airline reservation manager
///
/// Manages flights, seat maps, reservations and waiting lists stored as
/// plain text files in a data directory. Each invocation runs one command.
#[derive(Parser)]
#[command(version, about, name = "jetway")]
pub struct Args {
    /// Directory holding the data files. Defaults to $XDG_DATA_HOME/jetway
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Username to log in with
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Password to log in with, or the new account's password when
    /// registering
    #[arg(long, global = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Register, list and delete accounts
    #[command(alias = "a")]
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Manage the flight catalog
    #[command(alias = "f")]
    Flight {
        #[command(subcommand)]
        command: FlightCommands,
    },
    /// Book a seat on a flight
    #[command(alias = "b")]
    Book(BookArgs),
    /// List and cancel reservations
    #[command(alias = "r")]
    Reservation {
        #[command(subcommand)]
        command: ReservationCommands,
    },
    /// Waiting lists of fully booked flights
    #[command(alias = "w")]
    Waitlist {
        #[command(subcommand)]
        command: WaitlistCommands,
    },
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Subcommand)]
pub enum AccountCommands {
    /// Register a new account (password from --password)
    Register(RegisterArgs),
    /// List accounts (admin)
    #[command(alias = "ls")]
    List(ListAccountsArgs),
    /// Delete a customer account with its reservations (admin)
    Delete(DeleteAccountArgs),
}

#[derive(ClapArgs)]
pub struct RegisterArgs {
    #[arg(help = "Login name for the new account")]
    pub username: String,
    /// Full name, used as the passenger name on bookings
    #[arg(long)]
    pub name: String,
    /// Register an admin instead of a customer
    #[arg(long)]
    pub admin: bool,
}

#[derive(ClapArgs)]
pub struct ListAccountsArgs {
    /// Only list accounts with this role
    #[arg(long, value_enum)]
    pub role: Option<RoleArg>,
}

#[derive(ClapArgs)]
pub struct DeleteAccountArgs {
    #[arg(help = "Username of the customer account to delete")]
    pub username: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Admin,
    Customer,
}

impl From<RoleArg> for Role {
    fn from(val: RoleArg) -> Self {
        match val {
            RoleArg::Admin => Role::Admin,
            RoleArg::Customer => Role::Customer,
        }
    }
}

// ============================================================================
// Flights
// ============================================================================

#[derive(Subcommand)]
pub enum FlightCommands {
    /// Create a flight (admin)
    #[command(alias = "c")]
    Create(CreateFlightArgs),
    /// List flights
    #[command(alias = "ls")]
    List(ListFlightsArgs),
    /// Show a flight with its seat map
    #[command(alias = "s")]
    Show(ShowFlightArgs),
    /// Update flight details (admin)
    #[command(alias = "u")]
    Update(UpdateFlightArgs),
    /// Delete a flight with its reservations and waiting list (admin)
    Delete(DeleteFlightArgs),
}

#[derive(ClapArgs)]
pub struct CreateFlightArgs {
    #[arg(long, help = "Operating airline")]
    pub airline: String,
    #[arg(long, help = "Aircraft registration or number")]
    pub plane: String,
    #[arg(
        long,
        help = "Number of seats; decides the cabin layout (2-2 below 60, 3-3 below 150, twin aisle above)"
    )]
    pub capacity: usize,
    #[arg(long, help = "Route, e.g. \"Manila to Cebu\"")]
    pub destination: String,
    #[arg(long, help = "Departure time")]
    pub departure: String,
    #[arg(long, help = "Arrival time")]
    pub arrival: String,
}

impl From<CreateFlightArgs> for CreateFlight {
    fn from(val: CreateFlightArgs) -> Self {
        CreateFlight {
            airline: val.airline,
            plane_id: val.plane,
            capacity: val.capacity,
            destination: val.destination,
            departure: val.departure,
            arrival: val.arrival,
        }
    }
}

#[derive(ClapArgs)]
pub struct ListFlightsArgs {
    #[arg(long, help = "Only flights whose destination contains this text")]
    pub destination: Option<String>,
    #[arg(long, help = "Only flights of this airline")]
    pub airline: Option<String>,
}

impl From<ListFlightsArgs> for FlightFilter {
    fn from(val: ListFlightsArgs) -> Self {
        FlightFilter {
            destination: val.destination,
            airline: val.airline,
        }
    }
}

#[derive(ClapArgs)]
pub struct ShowFlightArgs {
    #[arg(help = "Flight ID, e.g. FL10001")]
    pub id: String,
}

#[derive(ClapArgs)]
pub struct UpdateFlightArgs {
    #[arg(help = "Flight ID, e.g. FL10001")]
    pub id: String,
    #[arg(long)]
    pub airline: Option<String>,
    #[arg(long)]
    pub plane: Option<String>,
    #[arg(long, help = "New capacity; only while the flight has no reservations")]
    pub capacity: Option<usize>,
    #[arg(long)]
    pub destination: Option<String>,
    #[arg(long)]
    pub departure: Option<String>,
    #[arg(long)]
    pub arrival: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<FlightStatusArg>,
}

impl From<UpdateFlightArgs> for UpdateFlight {
    fn from(val: UpdateFlightArgs) -> Self {
        UpdateFlight {
            id: val.id,
            airline: val.airline,
            plane_id: val.plane,
            capacity: val.capacity,
            destination: val.destination,
            departure: val.departure,
            arrival: val.arrival,
            status: val.status.map(Into::into),
        }
    }
}

#[derive(ClapArgs)]
pub struct DeleteFlightArgs {
    #[arg(help = "Flight ID, e.g. FL10001")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

/// Flight status values accepted by `flight update --status`
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum FlightStatusArg {
    OnTime,
    Delayed,
    Boarding,
    Departed,
    Arrived,
    Cancelled,
}

impl From<FlightStatusArg> for FlightStatus {
    fn from(val: FlightStatusArg) -> Self {
        match val {
            FlightStatusArg::OnTime => FlightStatus::OnTime,
            FlightStatusArg::Delayed => FlightStatus::Delayed,
            FlightStatusArg::Boarding => FlightStatus::Boarding,
            FlightStatusArg::Departed => FlightStatus::Departed,
            FlightStatusArg::Arrived => FlightStatus::Arrived,
            FlightStatusArg::Cancelled => FlightStatus::Cancelled,
        }
    }
}

// ============================================================================
// Booking and reservations
// ============================================================================

/// Book a seat and pay the fare with GCash or a card
#[derive(ClapArgs)]
pub struct BookArgs {
    #[arg(help = "Flight ID, e.g. FL10001")]
    pub flight_id: String,
    #[arg(long, help = "Seat label such as 12C; defaults to the first free seat")]
    pub seat: Option<String>,
    #[arg(
        long,
        value_name = "NUMBER",
        conflicts_with = "card",
        required_unless_present = "card",
        help = "Pay with the GCash account of this mobile number"
    )]
    pub gcash: Option<String>,
    #[arg(
        long,
        value_name = "NUMBER",
        requires_all = ["expiry", "cvv"],
        help = "Pay with this card number"
    )]
    pub card: Option<String>,
    #[arg(long, value_name = "MM/YY", requires = "card", help = "Card expiry date")]
    pub expiry: Option<String>,
    #[arg(long, requires = "card", help = "Card security code")]
    pub cvv: Option<String>,
}

impl TryFrom<BookArgs> for BookSeat {
    type Error = anyhow::Error;

    fn try_from(val: BookArgs) -> Result<Self, Self::Error> {
        let payment = match (val.gcash, val.card, val.expiry, val.cvv) {
            (Some(number), None, _, _) => PaymentMethod::GCash { number },
            (None, Some(number), Some(expiry), Some(cvv)) => PaymentMethod::Card {
                number,
                expiry,
                cvv,
            },
            _ => anyhow::bail!("Pay with either --gcash or --card with --expiry and --cvv"),
        };
        Ok(BookSeat {
            flight_id: val.flight_id,
            seat: val.seat,
            payment,
        })
    }
}

#[derive(Subcommand)]
pub enum ReservationCommands {
    /// List reservations; customers see their own
    #[command(alias = "ls")]
    List(ListReservationsArgs),
    /// Cancel a reservation and release its seat
    Cancel(CancelReservationArgs),
}

#[derive(ClapArgs)]
pub struct ListReservationsArgs {
    #[arg(long = "flight", help = "Only reservations on this flight")]
    pub flight_id: Option<String>,
}

#[derive(ClapArgs)]
pub struct CancelReservationArgs {
    #[arg(help = "Reservation ID, e.g. RES10001")]
    pub id: String,
}

// ============================================================================
// Waiting lists
// ============================================================================

#[derive(Subcommand)]
pub enum WaitlistCommands {
    /// Join the waiting list of a fully booked flight
    Join(WaitlistFlightArgs),
    /// Show a flight's waiting list (admin)
    Show(WaitlistFlightArgs),
    /// Book a seat for the first passenger in line (admin)
    Promote(PromoteArgs),
    /// Take a passenger off a waiting list (admin)
    Remove(WaitlistRemoveArgs),
}

#[derive(ClapArgs)]
pub struct WaitlistFlightArgs {
    #[arg(help = "Flight ID, e.g. FL10001")]
    pub flight_id: String,
}

#[derive(ClapArgs)]
pub struct PromoteArgs {
    #[arg(help = "Flight ID, e.g. FL10001")]
    pub flight_id: String,
    #[arg(long, help = "Seat label; defaults to the first free seat")]
    pub seat: Option<String>,
}

impl From<PromoteArgs> for Promote {
    fn from(val: PromoteArgs) -> Self {
        Promote {
            flight_id: val.flight_id,
            seat: val.seat,
        }
    }
}

#[derive(ClapArgs)]
pub struct WaitlistRemoveArgs {
    #[arg(help = "Flight ID, e.g. FL10001")]
    pub flight_id: String,
    #[arg(help = "Username of the waiting passenger")]
    pub username: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_book_with_card() {
        let args = Args::try_parse_from([
            "jetway", "book", "FL10001", "--seat", "3c", "--card", "4111111111114242", "--expiry",
            "09/29", "--cvv", "123",
        ])
        .unwrap();
        let Some(Commands::Book(book)) = args.command else {
            panic!("expected book command");
        };
        let params = BookSeat::try_from(book).unwrap();
        assert_eq!(params.seat.as_deref(), Some("3c"));
        assert!(matches!(params.payment, PaymentMethod::Card { .. }));
    }

    #[test]
    fn test_book_requires_a_payment_method() {
        assert!(Args::try_parse_from(["jetway", "book", "FL10001"]).is_err());
        assert!(Args::try_parse_from(["jetway", "book", "FL10001", "--card", "4242"]).is_err());
        assert!(Args::try_parse_from([
            "jetway", "book", "FL10001", "--gcash", "0917", "--card", "4242", "--expiry", "01/30",
            "--cvv", "123",
        ])
        .is_err());
    }

    #[test]
    fn test_status_arg_conversion() {
        let args = Args::try_parse_from([
            "jetway", "flight", "update", "FL10001", "--status", "on-time",
        ])
        .unwrap();
        let Some(Commands::Flight {
            command: FlightCommands::Update(update),
        }) = args.command
        else {
            panic!("expected flight update");
        };
        assert_eq!(UpdateFlight::from(update).status, Some(FlightStatus::OnTime));
    }
}

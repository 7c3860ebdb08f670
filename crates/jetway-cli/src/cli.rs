//! Command handlers.
//!
//! [`Cli`] owns the agency for the duration of one command: it checks the
//! login the command needs, runs the agency operation and renders the
//! result as markdown, or as JSON with `--json`.

use std::fmt::Display;

use anyhow::{anyhow, bail, Context, Result};
use jetway_core::{
    display::{CreateResult, OperationStatus},
    models::{Account, FlightFilter, ReservationFilter, Role},
    params::{BookSeat, Credentials, Register},
    Agency, ReservationError,
};
use log::debug;
use serde::Serialize;

use crate::{
    args::{
        AccountCommands, BookArgs, FlightCommands, ReservationCommands, WaitlistCommands,
    },
    renderer::TerminalRenderer,
};

/// Credentials given on the command line.
pub struct Login {
    pub user: Option<String>,
    pub password: Option<String>,
}

pub struct Cli {
    agency: Agency,
    renderer: TerminalRenderer,
    login: Login,
    json: bool,
}

impl Cli {
    pub fn new(agency: Agency, renderer: TerminalRenderer, login: Login, json: bool) -> Self {
        Self {
            agency,
            renderer,
            login,
            json,
        }
    }

    /// Prints a result as JSON or as rendered markdown.
    fn output<T: Serialize + ?Sized>(&self, value: &T, markdown: impl Display) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
            println!("{json}");
        } else {
            self.renderer.render(&markdown.to_string());
        }
        Ok(())
    }

    fn credentials(&self, role: Role) -> Result<Credentials> {
        match (&self.login.user, &self.login.password) {
            (Some(username), Some(password)) => Ok(Credentials {
                username: username.clone(),
                password: password.clone(),
                role,
            }),
            _ => bail!("This command requires --user and --password ({role} login)"),
        }
    }

    /// Authenticates the command-line login as the given role.
    fn login_as(&self, role: Role) -> Result<Account> {
        let credentials = self.credentials(role)?;
        let account = self.agency.authenticate(&credentials)?;
        debug!("Authenticated {} as {}", account.username, account.role);
        Ok(account)
    }

    /// Authenticates the command-line login as a customer or an admin.
    fn login_any(&self) -> Result<Account> {
        self.login_as(Role::Customer)
            .or_else(|_| self.login_as(Role::Admin))
    }

    fn confirm(confirmed: bool, what: &str) -> Result<()> {
        if !confirmed {
            bail!("Refusing to delete {what} without --confirm");
        }
        Ok(())
    }

    pub fn handle_account_command(mut self, command: AccountCommands) -> Result<()> {
        match command {
            AccountCommands::Register(args) => {
                let password = self
                    .login
                    .password
                    .clone()
                    .context("Registering requires --password")?;
                let account = self.agency.register(&Register {
                    username: args.username,
                    password,
                    name: args.name,
                    role: if args.admin { Role::Admin } else { Role::Customer },
                })?;
                let result = CreateResult::new(account);
                self.output(&result.resource, &result)
            }
            AccountCommands::List(args) => {
                self.login_as(Role::Admin)?;
                let accounts = self.agency.list_accounts(args.role.map(Into::into));
                self.output(&accounts.0, &accounts)
            }
            AccountCommands::Delete(args) => {
                self.login_as(Role::Admin)?;
                Self::confirm(args.confirm, &format!("account '{}'", args.username))?;
                let result = self.agency.delete_account(&args.username)?;
                self.output(&result.resource, &result)
            }
        }
    }

    pub fn handle_flight_command(mut self, command: FlightCommands) -> Result<()> {
        match command {
            FlightCommands::Create(args) => {
                self.login_as(Role::Admin)?;
                let flight = self.agency.create_flight(&args.into())?;
                let result = CreateResult::new(flight);
                self.output(&result.resource, &result)
            }
            FlightCommands::List(args) => self.list_flights(&args.into()),
            FlightCommands::Show(args) => {
                let flight = self.agency.get_flight(&args.id)?;
                self.output(flight, flight)
            }
            FlightCommands::Update(args) => {
                self.login_as(Role::Admin)?;
                let result = self.agency.update_flight(&args.into())?;
                self.output(&result.resource, &result)
            }
            FlightCommands::Delete(args) => {
                self.login_as(Role::Admin)?;
                Self::confirm(args.confirm, &format!("flight {}", args.id))?;
                let result = self.agency.delete_flight(&args.id)?;
                self.output(&result.resource, &result)
            }
        }
    }

    pub fn list_flights(&self, filter: &FlightFilter) -> Result<()> {
        let flights = self.agency.list_flights(filter);
        self.output(&flights.0, &flights)
    }

    pub fn handle_book(mut self, args: BookArgs) -> Result<()> {
        let customer = self.login_as(Role::Customer)?;
        let params = BookSeat::try_from(args)?;
        let reservation = match self.agency.book_seat(&customer, &params) {
            Ok(reservation) => reservation,
            Err(e @ ReservationError::FlightFullyBooked { .. }) => {
                return Err(anyhow!(
                    "{e}; join the waiting list with `jetway waitlist join {}`",
                    params.flight_id
                ));
            }
            Err(e) => return Err(e.into()),
        };
        let result = CreateResult::new(reservation);
        self.output(&result.resource, &result)
    }

    pub fn handle_reservation_command(mut self, command: ReservationCommands) -> Result<()> {
        let actor = self.login_any()?;
        match command {
            ReservationCommands::List(args) => {
                let filter = ReservationFilter {
                    username: (!actor.is_admin()).then(|| actor.username.clone()),
                    flight_id: args.flight_id,
                };
                let reservations = self.agency.list_reservations(&filter);
                self.output(&reservations.0, &reservations)
            }
            ReservationCommands::Cancel(args) => {
                let result = self.agency.cancel_reservation(&actor, &args.id)?;
                self.output(&result.resource, &result)
            }
        }
    }

    pub fn handle_waitlist_command(mut self, command: WaitlistCommands) -> Result<()> {
        match command {
            WaitlistCommands::Join(args) => {
                let customer = self.login_as(Role::Customer)?;
                let list = self.agency.join_waiting_list(&customer, &args.flight_id)?;
                let status = OperationStatus::success(format!(
                    "Added {} to the waiting list for {} (position {})",
                    customer.username,
                    args.flight_id,
                    list.len()
                ));
                self.output(&list, &status)
            }
            WaitlistCommands::Show(args) => {
                self.login_as(Role::Admin)?;
                let list = self.agency.waiting_list(&args.flight_id)?;
                self.output(&list, &list)
            }
            WaitlistCommands::Promote(args) => {
                self.login_as(Role::Admin)?;
                let reservation = self.agency.promote(&args.into())?;
                let result = CreateResult::new(reservation);
                self.output(&result.resource, &result)
            }
            WaitlistCommands::Remove(args) => {
                self.login_as(Role::Admin)?;
                self.agency
                    .remove_from_waiting_list(&args.flight_id, &args.username)?;
                let list = self.agency.waiting_list(&args.flight_id)?;
                let status = OperationStatus::success(format!(
                    "Removed {} from the waiting list for {}",
                    args.username, args.flight_id
                ));
                self.output(&list, &status)
            }
        }
    }
}

//! Jetway CLI Application
//!
//! Command-line interface for the Jetway airline reservation manager.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::{Cli, Login};
use jetway_core::{models::FlightFilter, AgencyBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_dir,
        no_color,
        json,
        user,
        password,
        command,
    } = Args::parse();

    let agency = AgencyBuilder::new()
        .with_data_dir(data_dir)
        .build()
        .context("Failed to initialize agency")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(agency, renderer, Login { user, password }, json);

    info!("Jetway started");

    match command {
        Some(Account { command }) => cli.handle_account_command(command),
        Some(Flight { command }) => cli.handle_flight_command(command),
        Some(Book(args)) => cli.handle_book(args),
        Some(Reservation { command }) => cli.handle_reservation_command(command),
        Some(Waitlist { command }) => cli.handle_waitlist_command(command),
        None => cli.list_flights(&FlightFilter::default()),
    }
}

//! Loading agency state from storage and writing it back.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use super::{ids::IdGenerator, Agency};
use crate::{
    error::{ReservationError, Result},
    models::{Flight, WaitingList},
    seatmap::{Restored, SeatLabel, SeatMap},
    store::{self, records, records::FlightRecord, Storage},
};

/// Non-empty lines of a text file with their 1-based line numbers.
fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Decodes every line of a record file, logging and skipping malformed ones.
fn decode_all<T>(
    storage: &dyn Storage,
    key: &str,
    decode: impl Fn(&str) -> std::result::Result<T, String>,
) -> Result<Vec<T>> {
    let Some(text) = storage.load_text(key)? else {
        debug!("{key} does not exist yet");
        return Ok(Vec::new());
    };
    Ok(lines(&text)
        .filter_map(|(number, line)| match decode(line) {
            Ok(record) => Some(record),
            Err(reason) => {
                warn!("Skipping {key} line {number}: {reason}");
                None
            }
        })
        .collect())
}

impl Agency {
    /// Reads every collection from storage.
    pub(crate) fn load(storage: Box<dyn Storage>) -> Result<Self> {
        let accounts = decode_all(storage.as_ref(), store::USERS, records::decode_account)?;
        let reservations =
            decode_all(storage.as_ref(), store::RESERVATIONS, records::decode_reservation)?;

        let mut flights = Vec::new();
        for record in decode_all(storage.as_ref(), store::FLIGHTS, FlightRecord::decode)? {
            if flights.iter().any(|flight: &Flight| flight.id == record.id) {
                warn!("Skipping duplicate flight {}", record.id);
                continue;
            }
            match Self::load_flight(storage.as_ref(), record) {
                Ok(flight) => flights.push(flight),
                Err(ReservationError::InvalidInput { field, reason }) => {
                    warn!("Skipping flight with invalid {field}: {reason}");
                }
                Err(e) => return Err(e),
            }
        }

        let mut waiting_lists = BTreeMap::new();
        for flight in &flights {
            let mut list = WaitingList::new(flight.id.as_str());
            let key = store::waitlist_key(&flight.id);
            for passenger in decode_all(storage.as_ref(), &key, records::decode_waiting)? {
                if let Err(e) = list.push(&passenger.username, &passenger.passenger_name) {
                    warn!("Skipping {key} entry: {e}");
                }
            }
            waiting_lists.insert(flight.id.clone(), list);
        }

        let ids = IdGenerator::resume(
            flights.iter().map(|flight| flight.id.as_str()),
            reservations.iter().map(|reservation| reservation.id.as_str()),
        );

        let mut agency = Self {
            storage,
            flights,
            reservations,
            waiting_lists,
            accounts,
            ids,
        };
        agency.reconcile_reservations();
        debug!(
            "Loaded {} flights, {} reservations, {} accounts",
            agency.flights.len(),
            agency.reservations.len(),
            agency.accounts.len()
        );
        Ok(agency)
    }

    /// Builds a flight from its record and stored seat grid.
    ///
    /// The grid is authoritative for seat state. A grid that cannot be used
    /// is replaced by a fresh layout; reservations are re-applied to it by
    /// [`Agency::reconcile_reservations`].
    fn load_flight(storage: &dyn Storage, record: FlightRecord) -> Result<Flight> {
        let key = store::seatmap_key(&record.id);
        let stored = storage.load_text(&key)?;

        let seats = match SeatMap::restore(record.capacity, stored.as_deref()) {
            Ok((seats, Restored::Loaded | Restored::Repaired { .. })) => seats,
            Ok((seats, Restored::Rebuilt { reason })) => {
                warn!("Flight {}: seat grid rebuilt ({reason})", record.id);
                seats
            }
            Err(e @ ReservationError::InvalidGrid { .. }) => {
                warn!("Flight {}: {e}; seat grid rebuilt", record.id);
                SeatMap::new(record.capacity)?
            }
            Err(e) => return Err(e),
        };

        if seats.available_seats() != record.available {
            warn!(
                "Flight {}: {} lists {} available seats, seat grid has {}; using the seat grid",
                record.id,
                store::FLIGHTS,
                record.available,
                seats.available_seats()
            );
        }

        Ok(Flight {
            id: record.id,
            airline: record.airline,
            plane_id: record.plane_id,
            destination: record.destination,
            departure: record.departure,
            arrival: record.arrival,
            status: record.status,
            seats,
        })
    }

    /// Brings seat grids in line with the reservation ledger.
    ///
    /// Reserved seats that a grid shows as free are booked again; this
    /// happens when a grid was rebuilt or edited by hand. Seats a grid shows
    /// as booked with no reservation behind them are released. Reservations
    /// whose flight or seat no longer exists are kept and logged.
    fn reconcile_reservations(&mut self) {
        for reservation in &self.reservations {
            let Some(flight) = self
                .flights
                .iter_mut()
                .find(|flight| flight.id == reservation.flight_id)
            else {
                warn!(
                    "Reservation {} refers to unknown flight {}",
                    reservation.id, reservation.flight_id
                );
                continue;
            };
            if flight.seats.check_available(&reservation.seat) {
                warn!(
                    "Reservation {}: seat {} on {} was free in the seat grid; marking it booked",
                    reservation.id, reservation.seat, flight.id
                );
                if let Err(e) = flight.seats.book(&reservation.seat) {
                    warn!("Reservation {}: {e}", reservation.id);
                }
            }
        }

        for flight in &mut self.flights {
            let reserved: BTreeSet<String> = self
                .reservations
                .iter()
                .filter(|reservation| reservation.flight_id == flight.id)
                .filter_map(|reservation| reservation.seat.parse::<SeatLabel>().ok())
                .map(|label| label.to_string())
                .collect();
            for label in flight.seats.booked_labels() {
                if reserved.contains(&label) {
                    continue;
                }
                warn!(
                    "Flight {}: seat {label} is booked in the seat grid without a reservation; releasing it",
                    flight.id
                );
                if let Err(e) = flight.seats.cancel(&label) {
                    warn!("Flight {}: {e}", flight.id);
                }
            }
        }
    }

    pub(crate) fn save_flights(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .flights
            .iter()
            .map(|flight| {
                FlightRecord {
                    id: flight.id.clone(),
                    airline: flight.airline.clone(),
                    plane_id: flight.plane_id.clone(),
                    capacity: flight.capacity(),
                    available: flight.available_seats(),
                    destination: flight.destination.clone(),
                    departure: flight.departure.clone(),
                    arrival: flight.arrival.clone(),
                    status: flight.status,
                }
                .encode()
            })
            .collect();
        debug!("Saving {} flights", lines.len());
        self.storage.save_lines(store::FLIGHTS, &lines)
    }

    pub(crate) fn save_seatmap(&mut self, flight_id: &str) -> Result<()> {
        let index = self.flight_index(flight_id)?;
        let grid = self.flights[index].seats.serialize();
        self.storage
            .save(&store::seatmap_key(flight_id), grid.as_bytes())
    }

    /// Writes the flight record file and one flight's seat grid together,
    /// as every seat change alters both.
    pub(crate) fn save_flight_state(&mut self, flight_id: &str) -> Result<()> {
        self.save_seatmap(flight_id)?;
        self.save_flights()
    }

    pub(crate) fn save_reservations(&mut self) -> Result<()> {
        let lines: Vec<String> = self
            .reservations
            .iter()
            .map(records::encode_reservation)
            .collect();
        debug!("Saving {} reservations", lines.len());
        self.storage.save_lines(store::RESERVATIONS, &lines)
    }

    /// Writes a waiting list, removing its file once nobody is waiting.
    pub(crate) fn save_waiting_list(&mut self, flight_id: &str) -> Result<()> {
        let key = store::waitlist_key(flight_id);
        let lines: Vec<String> = match self.waiting_lists.get(flight_id) {
            Some(list) if !list.is_empty() => list.iter().map(records::encode_waiting).collect(),
            _ => return self.storage.delete(&key),
        };
        self.storage.save_lines(&key, &lines)
    }

    pub(crate) fn save_accounts(&mut self) -> Result<()> {
        let lines: Vec<String> = self.accounts.iter().map(records::encode_account).collect();
        debug!("Saving {} accounts", lines.len());
        self.storage.save_lines(store::USERS, &lines)
    }
}

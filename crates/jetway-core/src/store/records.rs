//! Line codecs for the comma-separated record files.
//!
//! Text fields never contain commas or newlines; agency operations reject
//! such input before anything is written. Decoding reports a short reason
//! for malformed lines so the loader can log and skip them.

use jiff::Timestamp;
use log::warn;

use crate::models::{Account, FlightStatus, Reservation, ReservationStatus, Role, WaitingPassenger};

const FLIGHT_FIELDS: usize = 9;
const RESERVATION_FIELDS: usize = 8;
const WAITING_FIELDS: usize = 2;
const USER_FIELDS: usize = 4;

fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, String> {
    let fields: Vec<&str> = line.trim_end_matches('\r').split(',').collect();
    if fields.len() < expected {
        return Err(format!(
            "expected at least {expected} fields, found {}",
            fields.len()
        ));
    }
    Ok(fields)
}

/// A line of `flights.txt`.
///
/// The seat map lives in its own file, so this carries only the scalar
/// columns; `available` is informational and is checked against the
/// restored grid.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightRecord {
    pub id: String,
    pub airline: String,
    pub plane_id: String,
    pub capacity: usize,
    pub available: usize,
    pub destination: String,
    pub departure: String,
    pub arrival: String,
    pub status: FlightStatus,
}

impl FlightRecord {
    pub fn decode(line: &str) -> Result<Self, String> {
        let fields = split_fields(line, FLIGHT_FIELDS)?;
        let number = |index: usize, name: &str| {
            fields[index]
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid {name} '{}'", fields[index]))
        };
        let capacity = number(3, "capacity")?;
        let available = number(4, "available seat count")?;
        let status = fields[8].parse().unwrap_or_else(|e| {
            warn!("Flight {}: {e}; using {}", fields[0], FlightStatus::default().as_str());
            FlightStatus::default()
        });

        Ok(Self {
            id: fields[0].to_string(),
            airline: fields[1].to_string(),
            plane_id: fields[2].to_string(),
            capacity,
            available,
            destination: fields[5].to_string(),
            departure: fields[6].to_string(),
            arrival: fields[7].to_string(),
            status,
        })
    }

    pub fn encode(&self) -> String {
        [
            self.id.as_str(),
            &self.airline,
            &self.plane_id,
            &self.capacity.to_string(),
            &self.available.to_string(),
            &self.destination,
            &self.departure,
            &self.arrival,
            self.status.as_str(),
        ]
        .join(",")
    }
}

/// Decodes a line of `reservations.txt`.
///
/// The payment column and the booking time are optional; an empty payment
/// column reads as no payment.
pub fn decode_reservation(line: &str) -> Result<Reservation, String> {
    let fields = split_fields(line, RESERVATION_FIELDS)?;
    let status = fields[6].parse::<ReservationStatus>()?;
    let payment = fields
        .get(8)
        .filter(|payment| !payment.is_empty())
        .map(|payment| payment.to_string());
    let booked_at = match fields.get(9).filter(|ts| !ts.is_empty()) {
        Some(ts) => Some(
            ts.parse::<Timestamp>()
                .map_err(|e| format!("invalid booking time '{ts}': {e}"))?,
        ),
        None => None,
    };

    Ok(Reservation {
        id: fields[0].to_string(),
        passenger_name: fields[1].to_string(),
        flight_id: fields[2].to_string(),
        airline: fields[3].to_string(),
        destination: fields[4].to_string(),
        seat: fields[5].to_string(),
        status,
        username: fields[7].to_string(),
        payment,
        booked_at,
    })
}

pub fn encode_reservation(reservation: &Reservation) -> String {
    let mut line = [
        reservation.id.as_str(),
        &reservation.passenger_name,
        &reservation.flight_id,
        &reservation.airline,
        &reservation.destination,
        &reservation.seat,
        reservation.status.as_str(),
        &reservation.username,
        reservation.payment.as_deref().unwrap_or_default(),
    ]
    .join(",");
    if let Some(booked_at) = &reservation.booked_at {
        line.push(',');
        line.push_str(&booked_at.to_string());
    }
    line
}

/// Decodes a waiting list line. The passenger name runs to the end of the
/// line.
pub fn decode_waiting(line: &str) -> Result<WaitingPassenger, String> {
    let line = line.trim_end_matches('\r');
    match line.split_once(',') {
        Some((username, passenger_name)) if !username.is_empty() => Ok(WaitingPassenger {
            username: username.to_string(),
            passenger_name: passenger_name.to_string(),
        }),
        _ => Err(format!("expected {WAITING_FIELDS} fields")),
    }
}

pub fn encode_waiting(passenger: &WaitingPassenger) -> String {
    format!("{},{}", passenger.username, passenger.passenger_name)
}

/// Decodes a line of `users.txt`. Any role other than `admin` reads as a
/// customer.
pub fn decode_account(line: &str) -> Result<Account, String> {
    let fields = split_fields(line, USER_FIELDS)?;
    let role = if fields[3] == Role::Admin.as_str() {
        Role::Admin
    } else {
        Role::Customer
    };
    Ok(Account {
        username: fields[0].to_string(),
        password: fields[1].to_string(),
        name: fields[2].to_string(),
        role,
    })
}

pub fn encode_account(account: &Account) -> String {
    [
        account.username.as_str(),
        &account.password,
        &account.name,
        account.role.as_str(),
    ]
    .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flight_record_line() {
        let line = "FL10001,Cebu Pacific,RP-C7261,65,63,Manila to Cebu,08:15,09:30,On Time";
        let record = FlightRecord::decode(line).unwrap();
        assert_eq!(record.id, "FL10001");
        assert_eq!(record.capacity, 65);
        assert_eq!(record.available, 63);
        assert_eq!(record.status, FlightStatus::OnTime);
        assert_eq!(record.encode(), line);
    }

    #[test]
    fn test_flight_record_rejects_short_and_non_numeric() {
        let err = FlightRecord::decode("FL10001,Cebu Pacific,RP-C7261").unwrap_err();
        assert!(err.contains("found 3"));

        let err = FlightRecord::decode("FL10001,PAL,RP-1,lots,0,Manila,08:00,09:00,On Time")
            .unwrap_err();
        assert!(err.contains("capacity"));
    }

    #[test]
    fn test_flight_record_unknown_status_defaults() {
        let record =
            FlightRecord::decode("FL10002,PAL,RP-1,10,10,Manila,08:00,09:00,Grounded").unwrap();
        assert_eq!(record.status, FlightStatus::OnTime);
    }

    #[test]
    fn test_reservation_without_payment_column() {
        let reservation =
            decode_reservation("RES10001,Maria Santos,FL10001,PAL,Manila to Cebu,3C,Confirmed,maria")
                .unwrap();
        assert_eq!(reservation.payment, None);
        assert_eq!(reservation.booked_at, None);
        assert_eq!(
            encode_reservation(&reservation),
            "RES10001,Maria Santos,FL10001,PAL,Manila to Cebu,3C,Confirmed,maria,"
        );
    }

    #[test]
    fn test_reservation_with_payment_and_time() {
        let line = "RES10002,Juan Cruz,FL10001,PAL,Manila to Cebu,1A,Confirmed,juan,Card (****4242),2026-10-19T08:00:00Z";
        let reservation = decode_reservation(line).unwrap();
        assert_eq!(reservation.payment.as_deref(), Some("Card (****4242)"));
        assert_eq!(
            reservation.booked_at,
            Some("2026-10-19T08:00:00Z".parse().unwrap())
        );
        assert_eq!(encode_reservation(&reservation), line);
    }

    #[test]
    fn test_reservation_rejects_bad_time() {
        let err = decode_reservation("RES1,A,FL1,PAL,X,1A,Confirmed,a,,yesterday").unwrap_err();
        assert!(err.contains("booking time"));
    }

    #[test]
    fn test_waiting_line_keeps_name() {
        let passenger = decode_waiting("maria,Maria Santos").unwrap();
        assert_eq!(passenger.username, "maria");
        assert_eq!(passenger.passenger_name, "Maria Santos");
        assert_eq!(encode_waiting(&passenger), "maria,Maria Santos");
        assert!(decode_waiting("maria").is_err());
    }

    #[test]
    fn test_account_line() {
        let admin = decode_account("admin,admin123,Operations,admin").unwrap();
        assert_eq!(admin.role, Role::Admin);
        assert_eq!(encode_account(&admin), "admin,admin123,Operations,admin");

        let other = decode_account("maria,pw,Maria Santos,vip").unwrap();
        assert_eq!(other.role, Role::Customer);
        assert!(decode_account("maria,pw").is_err());
    }
}

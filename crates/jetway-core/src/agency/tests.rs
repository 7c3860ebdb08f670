//! Tests for agency operations.

use tempfile::TempDir;

use super::*;
use crate::{
    error::ErrorKind,
    models::{FlightFilter, FlightStatus, ReservationFilter, Role},
    params::{BookSeat, CreateFlight, Credentials, Promote, Register, UpdateFlight},
    payment::PaymentMethod,
    seatmap::CabinLayout,
    store::MemoryStorage,
};

fn memory_agency() -> Agency {
    AgencyBuilder::new()
        .with_storage(MemoryStorage::new())
        .build()
        .unwrap()
}

fn file_agency(dir: &TempDir) -> Agency {
    AgencyBuilder::new()
        .with_data_dir(Some(dir.path()))
        .build()
        .unwrap()
}

fn flight_params(capacity: usize) -> CreateFlight {
    CreateFlight {
        airline: "Cebu Pacific".to_string(),
        plane_id: "RP-C7261".to_string(),
        capacity,
        destination: "Manila to Cebu".to_string(),
        departure: "2026-11-02 08:15".to_string(),
        arrival: "2026-11-02 09:30".to_string(),
    }
}

fn customer(agency: &mut Agency, username: &str) -> Account {
    agency
        .register(&Register {
            username: username.to_string(),
            password: "pw".to_string(),
            name: format!("Passenger {username}"),
            role: Role::Customer,
        })
        .unwrap()
}

fn gcash() -> PaymentMethod {
    PaymentMethod::GCash {
        number: "09171234321".to_string(),
    }
}

fn book(agency: &mut Agency, actor: &Account, flight_id: &str, seat: Option<&str>) -> Result<Reservation> {
    agency.book_seat(actor, &BookSeat {
        flight_id: flight_id.to_string(),
        seat: seat.map(str::to_string),
        payment: gcash(),
    })
}

#[test]
fn test_create_flight_assigns_ids() {
    let mut agency = memory_agency();
    let first = agency.create_flight(&flight_params(65)).unwrap();
    let second = agency.create_flight(&flight_params(200)).unwrap();

    assert_eq!(first.id, "FL10001");
    assert_eq!(second.id, "FL10002");
    assert_eq!(first.available_seats(), 65);
    assert_eq!(agency.get_flight("FL10002").unwrap().capacity(), 200);
    assert!(agency.waiting_list("FL10001").unwrap().is_empty());
}

#[test]
fn test_create_flight_validation() {
    let mut agency = memory_agency();

    let err = agency.create_flight(&flight_params(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let mut params = flight_params(10);
    params.destination = "Manila, Cebu".to_string();
    let err = agency.create_flight(&params).unwrap_err();
    assert!(err.to_string().contains("destination"));

    let mut params = flight_params(10);
    params.airline = "   ".to_string();
    assert!(agency.create_flight(&params).is_err());
    assert!(agency.list_flights(&FlightFilter::default()).is_empty());
}

#[test]
fn test_list_flights_with_filter() {
    let mut agency = memory_agency();
    agency.create_flight(&flight_params(10)).unwrap();
    let mut params = flight_params(10);
    params.airline = "PAL".to_string();
    params.destination = "Manila to Davao".to_string();
    agency.create_flight(&params).unwrap();

    let all = agency.list_flights(&FlightFilter::default());
    assert_eq!(all.len(), 2);

    let davao = agency.list_flights(&FlightFilter {
        destination: Some("davao".to_string()),
        ..Default::default()
    });
    assert_eq!(davao.len(), 1);
    assert_eq!(davao[0].airline, "PAL");
}

#[test]
fn test_get_unknown_flight() {
    let agency = memory_agency();
    let err = agency.get_flight("FL99999").unwrap_err();
    assert!(matches!(err, ReservationError::FlightNotFound { .. }));
}

#[test]
fn test_book_seat_records_reservation() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(65)).unwrap();
    let maria = customer(&mut agency, "maria");

    let reservation = book(&mut agency, &maria, &flight.id, Some("3e")).unwrap();
    assert_eq!(reservation.id, "RES10001");
    assert_eq!(reservation.seat, "3E");
    assert_eq!(reservation.passenger_name, "Passenger maria");
    assert_eq!(reservation.payment.as_deref(), Some("GCash (****4321)"));
    assert!(reservation.booked_at.is_some());

    let flight = agency.get_flight(&flight.id).unwrap();
    assert_eq!(flight.available_seats(), 64);
    assert!(!flight.seats.is_available("3E").unwrap());
}

#[test]
fn test_book_defaults_to_first_available() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(10)).unwrap();
    let maria = customer(&mut agency, "maria");

    assert_eq!(book(&mut agency, &maria, &flight.id, None).unwrap().seat, "1A");
    assert_eq!(book(&mut agency, &maria, &flight.id, None).unwrap().seat, "1B");
}

#[test]
fn test_book_taken_seat_is_not_charged() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(10)).unwrap();
    let maria = customer(&mut agency, "maria");
    let juan = customer(&mut agency, "juan");
    book(&mut agency, &maria, &flight.id, Some("1A")).unwrap();

    let err = book(&mut agency, &juan, &flight.id, Some("1a")).unwrap_err();
    assert!(matches!(err, ReservationError::SeatUnavailable { ref label } if label == "1A"));
    assert_eq!(agency.list_reservations(&ReservationFilter::default()).len(), 1);
}

#[test]
fn test_book_with_invalid_payment_leaves_seat_free() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(10)).unwrap();
    let maria = customer(&mut agency, "maria");

    let err = agency
        .book_seat(&maria, &BookSeat {
            flight_id: flight.id.clone(),
            seat: Some("2B".to_string()),
            payment: PaymentMethod::Card {
                number: "4111111111114242".to_string(),
                expiry: "13/30".to_string(),
                cvv: "123".to_string(),
            },
        })
        .unwrap_err();
    assert!(err.is_validation());
    assert!(agency.get_flight(&flight.id).unwrap().seats.is_available("2B").unwrap());
}

#[test]
fn test_fully_booked_flight() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(1)).unwrap();
    let maria = customer(&mut agency, "maria");
    let juan = customer(&mut agency, "juan");

    book(&mut agency, &maria, &flight.id, None).unwrap();
    assert!(agency.get_flight(&flight.id).unwrap().is_fully_booked());

    for seat in [None, Some("1A"), Some("1B")] {
        let err = book(&mut agency, &juan, &flight.id, seat).unwrap_err();
        assert!(matches!(err, ReservationError::FlightFullyBooked { .. }));
    }
}

#[test]
fn test_cancel_reservation_rules() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(10)).unwrap();
    let maria = customer(&mut agency, "maria");
    let juan = customer(&mut agency, "juan");
    let admin = agency
        .register(&Register {
            username: "ops".to_string(),
            password: "pw".to_string(),
            name: "Operations".to_string(),
            role: Role::Admin,
        })
        .unwrap();

    let first = book(&mut agency, &maria, &flight.id, Some("1A")).unwrap();
    let second = book(&mut agency, &maria, &flight.id, Some("1B")).unwrap();

    let err = agency.cancel_reservation(&juan, &first.id).unwrap_err();
    assert!(matches!(err, ReservationError::ReservationNotFound { .. }));

    agency.cancel_reservation(&maria, &first.id).unwrap();
    agency.cancel_reservation(&admin, &second.id).unwrap();

    let flight = agency.get_flight(&flight.id).unwrap();
    assert_eq!(flight.available_seats(), 10);
    assert!(agency.get_reservation(&first.id).is_err());
    let err = agency.cancel_reservation(&maria, &first.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_update_flight_tracks_changes() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(10)).unwrap();

    let result = agency
        .update_flight(&UpdateFlight {
            id: flight.id.clone(),
            status: Some(FlightStatus::Delayed),
            departure: Some("2026-11-02 09:15".to_string()),
            airline: Some("Cebu Pacific".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(result.changes.len(), 2);
    assert!(result.changes.iter().any(|c| c == "Status: On Time -> Delayed"));
    assert_eq!(result.resource.departure, "2026-11-02 09:15");

    let result = agency
        .update_flight(&UpdateFlight {
            id: flight.id.clone(),
            capacity: Some(80),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(result.resource.capacity(), 80);
    assert_eq!(result.resource.seats.layout(), crate::seatmap::CabinLayout::NarrowBody);
}

#[test]
fn test_capacity_change_rejected_with_reservations() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(10)).unwrap();
    let maria = customer(&mut agency, "maria");
    book(&mut agency, &maria, &flight.id, None).unwrap();

    let err = agency
        .update_flight(&UpdateFlight {
            id: flight.id.clone(),
            capacity: Some(20),
            status: Some(FlightStatus::Boarding),
            ..Default::default()
        })
        .unwrap_err();
    assert!(err.is_validation());

    let flight = agency.get_flight(&flight.id).unwrap();
    assert_eq!(flight.capacity(), 10);
    assert_eq!(flight.status, FlightStatus::OnTime);
}

#[test]
fn test_delete_flight_cascades() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(1)).unwrap();
    let other = agency.create_flight(&flight_params(10)).unwrap();
    let maria = customer(&mut agency, "maria");
    let juan = customer(&mut agency, "juan");
    book(&mut agency, &maria, &flight.id, None).unwrap();
    book(&mut agency, &maria, &other.id, None).unwrap();
    agency.join_waiting_list(&juan, &flight.id).unwrap();

    agency.delete_flight(&flight.id).unwrap();

    assert!(agency.get_flight(&flight.id).is_err());
    assert!(agency.waiting_list(&flight.id).is_err());
    let remaining = agency.list_reservations(&ReservationFilter::default());
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.iter().next().unwrap().flight_id, other.id);
}

#[test]
fn test_waiting_list_join_rules() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(1)).unwrap();
    let maria = customer(&mut agency, "maria");
    let juan = customer(&mut agency, "juan");

    let err = agency.join_waiting_list(&juan, &flight.id).unwrap_err();
    assert!(err.is_validation());

    book(&mut agency, &maria, &flight.id, None).unwrap();
    let list = agency.join_waiting_list(&juan, &flight.id).unwrap();
    assert_eq!(list.len(), 1);

    let err = agency.join_waiting_list(&juan, &flight.id).unwrap_err();
    assert!(matches!(err, ReservationError::AlreadyWaiting { .. }));
}

#[test]
fn test_promote_books_head_of_queue() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(1)).unwrap();
    let maria = customer(&mut agency, "maria");
    let juan = customer(&mut agency, "juan");
    let ana = customer(&mut agency, "ana");

    let held = book(&mut agency, &maria, &flight.id, None).unwrap();
    agency.join_waiting_list(&juan, &flight.id).unwrap();
    agency.join_waiting_list(&ana, &flight.id).unwrap();

    let promote = Promote {
        flight_id: flight.id.clone(),
        seat: None,
    };
    let err = agency.promote(&promote).unwrap_err();
    assert!(matches!(err, ReservationError::FlightFullyBooked { .. }));

    agency.cancel_reservation(&maria, &held.id).unwrap();
    let promoted = agency.promote(&promote).unwrap();
    assert_eq!(promoted.username, "juan");
    assert_eq!(promoted.seat, "1A");
    assert_eq!(promoted.payment, None);

    let list = agency.waiting_list(&flight.id).unwrap();
    assert_eq!(list.front().unwrap().username, "ana");
    assert!(agency.get_flight(&flight.id).unwrap().is_fully_booked());
}

#[test]
fn test_promote_empty_list() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(4)).unwrap();
    let err = agency
        .promote(&Promote {
            flight_id: flight.id,
            seat: Some("1A".to_string()),
        })
        .unwrap_err();
    assert!(matches!(err, ReservationError::WaitingListEmpty { .. }));
}

#[test]
fn test_remove_from_waiting_list() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(1)).unwrap();
    let maria = customer(&mut agency, "maria");
    let juan = customer(&mut agency, "juan");
    book(&mut agency, &maria, &flight.id, None).unwrap();
    agency.join_waiting_list(&juan, &flight.id).unwrap();

    agency.remove_from_waiting_list(&flight.id, "juan").unwrap();
    assert!(agency.waiting_list(&flight.id).unwrap().is_empty());

    let err = agency.remove_from_waiting_list(&flight.id, "juan").unwrap_err();
    assert!(matches!(err, ReservationError::NotWaiting { .. }));
}

#[test]
fn test_register_and_authenticate() {
    let mut agency = memory_agency();
    customer(&mut agency, "maria");

    let err = agency
        .register(&Register {
            username: "maria".to_string(),
            password: "other".to_string(),
            name: "Someone Else".to_string(),
            role: Role::Admin,
        })
        .unwrap_err();
    assert!(err.to_string().contains("already exists"));

    let ok = agency.authenticate(&Credentials {
        username: "maria".to_string(),
        password: "pw".to_string(),
        role: Role::Customer,
    });
    assert_eq!(ok.unwrap().name, "Passenger maria");

    for (password, role) in [("wrong", Role::Customer), ("pw", Role::Admin)] {
        let err = agency
            .authenticate(&Credentials {
                username: "maria".to_string(),
                password: password.to_string(),
                role,
            })
            .unwrap_err();
        assert!(matches!(err, ReservationError::AuthenticationFailed));
    }
}

#[test]
fn test_list_accounts_by_role() {
    let mut agency = memory_agency();
    customer(&mut agency, "maria");
    customer(&mut agency, "juan");
    agency
        .register(&Register {
            username: "ops".to_string(),
            password: "pw".to_string(),
            name: "Operations".to_string(),
            role: Role::Admin,
        })
        .unwrap();

    assert_eq!(agency.list_accounts(None).len(), 3);
    assert_eq!(agency.list_accounts(Some(Role::Customer)).len(), 2);
    assert_eq!(agency.list_accounts(Some(Role::Admin)).len(), 1);
}

#[test]
fn test_delete_customer_releases_seats() {
    let mut agency = memory_agency();
    let flight = agency.create_flight(&flight_params(2)).unwrap();
    let maria = customer(&mut agency, "maria");
    let juan = customer(&mut agency, "juan");
    let ana = customer(&mut agency, "ana");
    book(&mut agency, &maria, &flight.id, None).unwrap();
    book(&mut agency, &juan, &flight.id, None).unwrap();
    agency.join_waiting_list(&ana, &flight.id).unwrap();

    agency.delete_account("juan").unwrap();
    agency.delete_account("ana").unwrap();

    let flight = agency.get_flight(&flight.id).unwrap();
    assert_eq!(flight.available_seats(), 1);
    assert!(flight.seats.is_available("1B").unwrap());
    assert!(agency.waiting_list(&flight.id).unwrap().is_empty());
    let left = agency.list_reservations(&ReservationFilter::default());
    assert_eq!(left.len(), 1);
    assert_eq!(left.iter().next().unwrap().username, "maria");

    let err = agency.delete_account("juan").unwrap_err();
    assert!(matches!(err, ReservationError::AccountNotFound { .. }));
}

#[test]
fn test_admin_accounts_cannot_be_deleted() {
    let mut agency = memory_agency();
    agency
        .register(&Register {
            username: "ops".to_string(),
            password: "pw".to_string(),
            name: "Operations".to_string(),
            role: Role::Admin,
        })
        .unwrap();
    assert!(agency.delete_account("ops").unwrap_err().is_validation());
    assert_eq!(agency.list_accounts(Some(Role::Admin)).len(), 1);
}

#[test]
fn test_state_survives_reload() {
    let dir = TempDir::new().unwrap();
    let (flight_id, reservation_id) = {
        let mut agency = file_agency(&dir);
        let flight = agency.create_flight(&flight_params(155)).unwrap();
        let maria = customer(&mut agency, "maria");
        let reservation = book(&mut agency, &maria, &flight.id, Some("3H")).unwrap();
        (flight.id, reservation.id)
    };

    let mut agency = file_agency(&dir);
    let flight = agency.get_flight(&flight_id).unwrap();
    assert_eq!(flight.available_seats(), 154);
    assert!(!flight.seats.is_available("3H").unwrap());
    assert_eq!(agency.get_reservation(&reservation_id).unwrap().seat, "3H");

    // numbering continues after the stored identifiers
    assert_eq!(agency.create_flight(&flight_params(4)).unwrap().id, "FL10002");
    let maria = agency
        .authenticate(&Credentials {
            username: "maria".to_string(),
            password: "pw".to_string(),
            role: Role::Customer,
        })
        .unwrap();
    assert_eq!(book(&mut agency, &maria, &flight_id, None).unwrap().id, "RES10002");
}

#[test]
fn test_missing_seat_grid_is_rebuilt_from_reservations() {
    let dir = TempDir::new().unwrap();
    let flight_id = {
        let mut agency = file_agency(&dir);
        let flight = agency.create_flight(&flight_params(20)).unwrap();
        let maria = customer(&mut agency, "maria");
        book(&mut agency, &maria, &flight.id, Some("2C")).unwrap();
        flight.id
    };
    std::fs::remove_file(dir.path().join("seatmaps").join(format!("{flight_id}.txt"))).unwrap();

    let agency = file_agency(&dir);
    let flight = agency.get_flight(&flight_id).unwrap();
    assert_eq!(flight.available_seats(), 19);
    assert!(!flight.seats.is_available("2C").unwrap());
}

#[test]
fn test_waiting_list_file_removed_when_empty() {
    let dir = TempDir::new().unwrap();
    let mut agency = file_agency(&dir);
    let flight = agency.create_flight(&flight_params(1)).unwrap();
    let maria = customer(&mut agency, "maria");
    let juan = customer(&mut agency, "juan");
    book(&mut agency, &maria, &flight.id, None).unwrap();

    let path = dir.path().join("waitinglists").join(format!("{}.txt", flight.id));
    agency.join_waiting_list(&juan, &flight.id).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "juan,Passenger juan\n");

    agency.remove_from_waiting_list(&flight.id, "juan").unwrap();
    assert!(!path.exists());
}

fn seeded_agency(files: &[(&str, &str)]) -> Agency {
    let mut storage = MemoryStorage::new();
    for (key, contents) in files {
        storage.save(key, contents.as_bytes()).unwrap();
    }
    AgencyBuilder::new().with_storage(storage).build().unwrap()
}

#[test]
fn test_capacity_above_maximum_is_rejected() {
    let mut agency = memory_agency();
    let err = agency.create_flight(&flight_params(usize::MAX)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let flight = agency.create_flight(&flight_params(10)).unwrap();
    let err = agency
        .update_flight(&UpdateFlight {
            id: flight.id.clone(),
            capacity: Some(CabinLayout::MAX_CAPACITY + 1),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(agency.get_flight(&flight.id).unwrap().capacity(), 10);
}

#[test]
fn test_load_skips_flight_with_oversized_capacity() {
    let agency = seeded_agency(&[(
        "flights.txt",
        "FL10001,Cebu Pacific,RP-C7261,18446744073709551615,0,Manila to Cebu,08:15,09:30,On Time\n\
         FL10002,AirAsia,RP-C8972,4,4,Cebu to Manila,18:00,19:10,Delayed\n",
    )]);
    let flights = agency.list_flights(&FlightFilter::default());
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id, "FL10002");
}

#[test]
fn test_load_releases_booked_seats_without_reservation() {
    let mut agency = seeded_agency(&[
        (
            "flights.txt",
            "FL10001,Cebu Pacific,RP-C7261,4,2,Manila to Cebu,08:15,09:30,On Time\n",
        ),
        ("seatmaps/FL10001.txt", "1,1,1,0,0\n"),
        (
            "reservations.txt",
            "RES10001,Maria Santos,FL10001,Cebu Pacific,Manila to Cebu,1B,Confirmed,maria\n",
        ),
    ]);

    let flight = agency.get_flight("FL10001").unwrap();
    assert_eq!(flight.available_seats(), 3);
    assert!(flight.seats.is_available("1A").unwrap());
    assert_eq!(flight.seats.booked_labels(), vec!["1B".to_string()]);

    // the freed seat can be booked again
    let juan = customer(&mut agency, "juan");
    let reservation = book(&mut agency, &juan, "FL10001", Some("1A")).unwrap();
    assert_eq!(reservation.seat, "1A");
}

#[test]
fn test_load_rebooks_reserved_seat_free_in_grid() {
    let agency = seeded_agency(&[
        (
            "flights.txt",
            "FL10001,Cebu Pacific,RP-C7261,4,4,Manila to Cebu,08:15,09:30,On Time\n",
        ),
        ("seatmaps/FL10001.txt", "0,0,1,0,0\n"),
        (
            "reservations.txt",
            "RES10001,Maria Santos,FL10001,Cebu Pacific,Manila to Cebu,1d,Confirmed,maria\n",
        ),
    ]);

    let flight = agency.get_flight("FL10001").unwrap();
    assert_eq!(flight.available_seats(), 3);
    assert_eq!(flight.seats.booked_labels(), vec!["1D".to_string()]);
}

#[test]
fn test_load_rejects_invalid_utf8() {
    let mut storage = MemoryStorage::new();
    storage.save("users.txt", &[0xff, 0xfe, b'\n']).unwrap();
    let err = AgencyBuilder::new().with_storage(storage).build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Storage);
    assert!(matches!(err, ReservationError::FileSystem { .. }));
}

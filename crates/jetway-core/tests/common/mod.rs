use jetway_core::{
    params::{CreateFlight, Register},
    Account, Agency, AgencyBuilder, Role,
};
use tempfile::TempDir;

/// Opens an agency over a data directory.
pub fn open_agency(temp_dir: &TempDir) -> Agency {
    AgencyBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .build()
        .expect("Failed to open agency")
}

/// Registers a customer account.
pub fn register_customer(agency: &mut Agency, username: &str, name: &str) -> Account {
    agency
        .register(&Register {
            username: username.to_string(),
            password: "pw".to_string(),
            name: name.to_string(),
            role: Role::Customer,
        })
        .expect("Failed to register customer")
}

pub fn flight_params(capacity: usize) -> CreateFlight {
    CreateFlight {
        airline: "Philippine Airlines".to_string(),
        plane_id: "RP-C3441".to_string(),
        capacity,
        destination: "Manila to Tokyo".to_string(),
        departure: "2026-12-01 06:00".to_string(),
        arrival: "2026-12-01 11:30".to_string(),
    }
}

//! Sequential identifiers such as `FL10001` and `RES10001`.

pub(crate) const FLIGHT_PREFIX: &str = "FL";
pub(crate) const RESERVATION_PREFIX: &str = "RES";

/// Numbering starts right after this value.
const BASE: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IdGenerator {
    last_flight: u64,
    last_reservation: u64,
}

impl IdGenerator {
    /// Continues numbering from the highest identifiers already in use.
    pub(crate) fn resume<'a>(
        flight_ids: impl IntoIterator<Item = &'a str>,
        reservation_ids: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            last_flight: highest(FLIGHT_PREFIX, flight_ids),
            last_reservation: highest(RESERVATION_PREFIX, reservation_ids),
        }
    }

    pub(crate) fn next_flight(&mut self) -> String {
        self.last_flight += 1;
        format!("{FLIGHT_PREFIX}{}", self.last_flight)
    }

    pub(crate) fn next_reservation(&mut self) -> String {
        self.last_reservation += 1;
        format!("{RESERVATION_PREFIX}{}", self.last_reservation)
    }
}

fn highest<'a>(prefix: &str, ids: impl IntoIterator<Item = &'a str>) -> u64 {
    ids.into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|number| number.parse::<u64>().ok())
        .fold(BASE, u64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_numbering() {
        let mut ids = IdGenerator::resume([], []);
        assert_eq!(ids.next_flight(), "FL10001");
        assert_eq!(ids.next_flight(), "FL10002");
        assert_eq!(ids.next_reservation(), "RES10001");
    }

    #[test]
    fn test_resume_from_highest() {
        let mut ids = IdGenerator::resume(
            ["FL10003", "FL10010", "FLX", "XX99999"],
            ["RES10002", "RES9", "RES10041"],
        );
        assert_eq!(ids.next_flight(), "FL10011");
        assert_eq!(ids.next_reservation(), "RES10042");
    }
}

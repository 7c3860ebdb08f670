//! Persistence of agency state as flat, line-delimited text files.
//!
//! Everything is addressed by a relative key such as `flights.txt` or
//! `seatmaps/FL10001.txt`. The [`Storage`] trait hides where those keys
//! live: [`FileStorage`] maps them onto a data directory and
//! [`MemoryStorage`] keeps them in memory for tests.
//!
//! ```text
//! flights.txt                 id,airline,plane,capacity,available,destination,departure,arrival,status
//! seatmaps/<flight>.txt       seat grid, one `0`/`1` row per line
//! reservations.txt            id,passenger,flight,airline,destination,seat,status,username,payment[,booked_at]
//! waitinglists/<flight>.txt   username,passenger name
//! users.txt                   username,password,name,admin|customer
//! ```

mod file;
mod memory;
pub mod records;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::io;

use crate::error::{IoResultExt, Result};

pub const FLIGHTS: &str = "flights.txt";
pub const RESERVATIONS: &str = "reservations.txt";
pub const USERS: &str = "users.txt";
pub const SEATMAP_DIR: &str = "seatmaps";
pub const WAITLIST_DIR: &str = "waitinglists";

/// Key of the seat grid file for a flight.
pub fn seatmap_key(flight_id: &str) -> String {
    format!("{SEATMAP_DIR}/{flight_id}.txt")
}

/// Key of the waiting list file for a flight.
pub fn waitlist_key(flight_id: &str) -> String {
    format!("{WAITLIST_DIR}/{flight_id}.txt")
}

/// Key-value access to persisted files.
pub trait Storage {
    /// Reads a whole file; `None` when it does not exist.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces a whole file, creating it if needed.
    fn save(&mut self, key: &str, contents: &[u8]) -> Result<()>;

    /// Removes a file. Removing a missing file is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;

    /// Reads a file as UTF-8 text.
    fn load_text(&self, key: &str) -> Result<Option<String>> {
        self.load(key)?
            .map(|bytes| {
                String::from_utf8(bytes)
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
                    .fs_context(key)
            })
            .transpose()
    }

    /// Writes a file from lines, each terminated by a newline.
    fn save_lines(&mut self, key: &str, lines: &[String]) -> Result<()> {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }
        self.save(key, contents.as_bytes())
    }
}

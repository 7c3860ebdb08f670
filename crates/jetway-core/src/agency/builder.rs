//! Builder for creating and configuring [`Agency`] instances.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;

use super::Agency;
use crate::{
    error::{IoResultExt, ReservationError, Result},
    store::{self, FileStorage, Storage},
};

/// Builder for creating and configuring [`Agency`] instances.
///
/// Without further configuration the agency keeps its files in
/// `$XDG_DATA_HOME/jetway` (usually `~/.local/share/jetway`).
#[derive(Default)]
pub struct AgencyBuilder {
    data_dir: Option<PathBuf>,
    storage: Option<Box<dyn Storage>>,
}

impl AgencyBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory holding the data files.
    ///
    /// `None` keeps the XDG default.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given storage instead of a data directory.
    pub fn with_storage(mut self, storage: impl Storage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Builds the agency and loads any persisted state.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::XdgDirectory` if the default data directory
    /// cannot be resolved, `ReservationError::FileSystem` if the directory
    /// tree cannot be created or a file cannot be read.
    pub fn build(self) -> Result<Agency> {
        let storage = match self.storage {
            Some(storage) => storage,
            None => {
                let data_dir = match self.data_dir {
                    Some(dir) => dir,
                    None => Self::default_data_dir()?,
                };
                Box::new(Self::prepare_data_dir(&data_dir)?)
            }
        };
        Agency::load(storage)
    }

    /// Creates the data directory and its subdirectories.
    fn prepare_data_dir(data_dir: &Path) -> Result<FileStorage> {
        for sub in [store::SEATMAP_DIR, store::WAITLIST_DIR] {
            let path = data_dir.join(sub);
            fs::create_dir_all(&path).fs_context(path)?;
        }
        info!("Using data directory {}", data_dir.display());
        Ok(FileStorage::new(data_dir))
    }

    /// Returns the default data directory following the XDG Base Directory
    /// specification.
    fn default_data_dir() -> Result<PathBuf> {
        let flights = xdg::BaseDirectories::with_prefix("jetway")
            .place_data_file(store::FLIGHTS)
            .map_err(|e| ReservationError::XdgDirectory(e.to_string()))?;
        flights
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| ReservationError::XdgDirectory("data directory has no parent".to_string()))
    }
}

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{BikeshareError, Result};
use crate::filter::{City, Filters};

use super::table::TripTable;

/// Resolves cities to their CSV exports under one data directory.
#[derive(Debug, Clone)]
pub struct TripLoader {
    data_dir: PathBuf,
}

impl Default for TripLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

impl TripLoader {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn path_for(&self, city: City) -> PathBuf {
        self.data_dir.join(city.file_name())
    }

    /// Read every trip of a city without filtering.
    ///
    /// # Errors
    /// Returns `DatasetNotFound` if the city's file is absent, otherwise any
    /// read or parse error from the file.
    pub fn load_city(&self, city: City) -> Result<TripTable> {
        let path = self.path_for(city);
        if !path.is_file() {
            return Err(BikeshareError::DatasetNotFound {
                city: city.name().to_string(),
                path,
            });
        }

        let file = File::open(&path).map_err(|source| BikeshareError::FileAccess {
            path: path.clone(),
            source,
        })?;
        let table = TripTable::from_reader(BufReader::new(file), &path)?;
        info!(city = %city, path = %path.display(), rows = table.len(), "loaded trip data");
        Ok(table)
    }

    /// Load a city's trips and keep the rows matching the month and day filters.
    ///
    /// An empty result is not an error.
    ///
    /// # Errors
    /// See [`TripLoader::load_city`].
    pub fn load_data(&self, filters: &Filters) -> Result<TripTable> {
        let table = self.load_city(filters.city)?;
        let total = table.len();
        let filtered = table.filter(filters.month, filters.day);
        debug!(%filters, total, kept = filtered.len(), "applied filters");
        Ok(filtered)
    }
}

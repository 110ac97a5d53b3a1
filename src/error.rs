use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BikeshareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No trip data for {city}: {} does not exist", path.display())]
    DatasetNotFound { city: String, path: PathBuf },

    #[error("Failed to access file: {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read CSV from {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("{}:{line}: invalid {column} value '{value}'", path.display())]
    InvalidField {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    #[error("Invalid {field}: '{value}'")]
    InvalidFilter { field: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl BikeshareError {
    /// Short name of the error kind, used as the heading of the error banner.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::DatasetNotFound { .. } => "DatasetNotFound",
            Self::FileAccess { .. } => "FileAccess",
            Self::Csv { .. } => "Csv",
            Self::MissingColumn { .. } => "MissingColumn",
            Self::InvalidField { .. } => "InvalidField",
            Self::InvalidFilter { .. } => "InvalidFilter",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
        }
    }

    /// Actionable hint printed under the error, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::DatasetNotFound { .. } => Some(
                "place the city CSV files in the data directory, or point to them with --data-dir",
            ),
            Self::MissingColumn { .. } => Some(
                "trip files need Start Time, End Time, Trip Duration, Start Station, End Station and User Type columns",
            ),
            Self::InvalidFilter { .. } => Some(
                "cities: chicago, new york city, washington; months: all, january..june; days: all, monday..sunday",
            ),
            Self::TomlParse(_) => Some("check the syntax of the configuration file"),
            _ => None,
        }
    }

    /// Whether the failure comes from the trip data rather than configuration or usage.
    #[must_use]
    pub const fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::DatasetNotFound { .. }
                | Self::FileAccess { .. }
                | Self::Csv { .. }
                | Self::MissingColumn { .. }
                | Self::InvalidField { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BikeshareError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

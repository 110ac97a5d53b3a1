mod error_output;
mod json;
mod page;
mod text;

pub use error_output::ErrorOutput;
pub use json::ReportJsonFormatter;
pub use page::PageFormatter;
pub use text::ReportTextFormatter;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::stats::TripReport;

/// Line printed between report sections.
pub const SEPARATOR: &str = "----------------------------------------";

/// Trait for formatting a trip report into various output formats.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &TripReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Formatter for this format.
    #[must_use]
    pub fn formatter(self, color: ColorMode, timing: bool) -> Box<dyn ReportFormatter> {
        match self {
            Self::Text => Box::new(ReportTextFormatter::new(color).with_timing(timing)),
            Self::Json => Box::new(ReportJsonFormatter::new().with_timing(timing)),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolve the mode against a stream's terminal status.
    #[must_use]
    pub fn use_colors(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Respect NO_COLOR environment variable (https://no-color.org/)
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::filter::{City, DayFilter, MonthFilter};
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorChoice {
    #[must_use]
    pub const fn mode(self) -> ColorMode {
        match self {
            Self::Auto => ColorMode::Auto,
            Self::Always => ColorMode::Always,
            Self::Never => ColorMode::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bikeshare")]
#[command(author, version, about = "Explore US bikeshare trip data for Chicago, New York City and Washington")]
#[command(long_about = "Interactively explore bikeshare trip data.\n\n\
    Without --city the explorer asks for a city, month and day, prints travel \
    statistics and offers to page through raw trips. With --city a single report \
    is printed and the program exits.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - Trip data missing or malformed\n  \
    2 - Configuration or usage error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(short, long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Print one report for this city and exit (chicago, new york city, washington)
    #[arg(long)]
    pub city: Option<City>,

    /// Month filter for --city (all, january..june)
    #[arg(long)]
    pub month: Option<MonthFilter>,

    /// Day filter for --city (all, monday..sunday)
    #[arg(long)]
    pub day: Option<DayFilter>,

    /// Report format [possible values: text, json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Control color output
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Omit the elapsed time after each statistics section
    #[arg(long)]
    pub no_timing: bool,

    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the greeting banner
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Filters were given without a city, so they have nothing to apply to.
    #[must_use]
    pub const fn has_orphan_filters(&self) -> bool {
        self.city.is_none() && (self.month.is_some() || self.day.is_some())
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

//! The four passes over a filtered trip table.
//!
//! Each reporter is a pure function of the table; [`TripReport::compute`] runs
//! them in a fixed order (time, station, duration, user) and records how long
//! each one took.

mod duration;
mod mode;
mod station;
mod time;
mod users;

pub use duration::{DurationStats, format_duration};
pub use mode::{CategoryCount, mode, value_counts};
pub use station::{StationPair, StationStats};
pub use time::TimeStats;
pub use users::{Availability, BirthYearStats, UserStats};

use std::time::{Duration, Instant};

use tracing::debug;

use crate::dataset::TripTable;
use crate::filter::Filters;

/// A reporter's result together with its wall-clock computation time.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Run `f`, measuring how long it took.
    pub fn measure(name: &str, f: impl FnOnce() -> T) -> Self {
        let start = Instant::now();
        let value = f();
        let elapsed = start.elapsed();
        debug!(reporter = name, elapsed_us = elapsed.as_micros(), "computed");
        Self { value, elapsed }
    }
}

/// Everything printed for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct TripReport {
    pub filters: Filters,
    pub trips: usize,
    pub time: Timed<TimeStats>,
    pub stations: Timed<StationStats>,
    pub durations: Timed<DurationStats>,
    pub users: Timed<UserStats>,
}

impl TripReport {
    #[must_use]
    pub fn compute(filters: Filters, table: &TripTable) -> Self {
        let time = Timed::measure("time", || TimeStats::compute(table));
        let stations = Timed::measure("station", || StationStats::compute(table));
        let durations = Timed::measure("duration", || DurationStats::compute(table));
        let users = Timed::measure("user", || UserStats::compute(table));

        Self {
            filters,
            trips: table.len(),
            time,
            stations,
            durations,
            users,
        }
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;

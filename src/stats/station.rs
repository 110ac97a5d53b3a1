use std::fmt;

use crate::dataset::TripTable;

use super::mode::mode;

/// A directed trip between two stations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

impl fmt::Display for StationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Most popular stations and trip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StationStats {
    pub common_start: Option<String>,
    pub common_end: Option<String>,
    /// Direction matters: A -> B and B -> A are counted separately.
    pub common_trip: Option<StationPair>,
}

impl StationStats {
    /// Ties resolve to the alphabetically first station (or pair).
    /// Empty station cells are missing values; a trip needs both ends.
    #[must_use]
    pub fn compute(table: &TripTable) -> Self {
        let starts = || table.iter().filter_map(|r| named(&r.start_station));
        let ends = || table.iter().filter_map(|r| named(&r.end_station));

        let common_trip = mode(
            table
                .iter()
                .filter_map(|r| Some((named(&r.start_station)?, named(&r.end_station)?))),
        )
        .map(|(start, end)| StationPair {
            start: start.to_string(),
            end: end.to_string(),
        });

        Self {
            common_start: mode(starts()).map(str::to_string),
            common_end: mode(ends()).map(str::to_string),
            common_trip,
        }
    }
}

fn named(station: &str) -> Option<&str> {
    (!station.is_empty()).then_some(station)
}

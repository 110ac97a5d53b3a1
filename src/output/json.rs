use serde::Serialize;

use crate::error::Result;
use crate::filter::{month_name, weekday_name};
use crate::stats::{Availability, BirthYearStats, CategoryCount, Timed, TripReport};

use super::ReportFormatter;

pub struct ReportJsonFormatter {
    show_timing: bool,
}

impl ReportJsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { show_timing: true }
    }

    #[must_use]
    pub const fn with_timing(mut self, show: bool) -> Self {
        self.show_timing = show;
        self
    }

    fn elapsed<T>(&self, timed: &Timed<T>) -> Option<f64> {
        self.show_timing.then(|| timed.elapsed.as_secs_f64())
    }
}

impl Default for ReportJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct JsonReport {
    filters: JsonFilters,
    trips: usize,
    time: JsonTimeStats,
    stations: JsonStationStats,
    durations: JsonDurationStats,
    users: JsonUserStats,
}

#[derive(Serialize)]
struct JsonFilters {
    city: String,
    month: String,
    day: String,
}

#[derive(Serialize)]
struct JsonTimeStats {
    common_month: Option<&'static str>,
    common_day: Option<&'static str>,
    common_start_hour: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_seconds: Option<f64>,
}

#[derive(Serialize)]
struct JsonStationPair {
    start: String,
    end: String,
}

#[derive(Serialize)]
struct JsonStationStats {
    common_start: Option<String>,
    common_end: Option<String>,
    common_trip: Option<JsonStationPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_seconds: Option<f64>,
}

#[derive(Serialize)]
struct JsonDurationStats {
    total_seconds: f64,
    mean_seconds: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_seconds: Option<f64>,
}

/// `{"available": false}` when the source file lacks the column.
#[derive(Serialize)]
struct JsonOptionalColumn<T> {
    available: bool,
    #[serde(flatten)]
    value: Option<T>,
}

impl<T: Clone> From<&Availability<T>> for JsonOptionalColumn<T> {
    fn from(availability: &Availability<T>) -> Self {
        Self {
            available: availability.is_available(),
            value: availability.as_option().cloned(),
        }
    }
}

#[derive(Serialize, Clone)]
struct JsonCounts {
    counts: Vec<CategoryCount>,
}

#[derive(Serialize, Clone)]
struct JsonBirthYears {
    earliest: Option<i32>,
    most_recent: Option<i32>,
    most_common: Option<i32>,
}

impl From<&BirthYearStats> for JsonBirthYears {
    fn from(stats: &BirthYearStats) -> Self {
        Self {
            earliest: stats.earliest,
            most_recent: stats.most_recent,
            most_common: stats.most_common,
        }
    }
}

#[derive(Serialize)]
struct JsonUserStats {
    user_types: Vec<CategoryCount>,
    genders: JsonOptionalColumn<JsonCounts>,
    birth_years: JsonOptionalColumn<JsonBirthYears>,
    #[serde(skip_serializing_if = "Option::is_none")]
    elapsed_seconds: Option<f64>,
}

impl ReportFormatter for ReportJsonFormatter {
    fn format(&self, report: &TripReport) -> Result<String> {
        let time = &report.time.value;
        let stations = &report.stations.value;
        let durations = &report.durations.value;
        let users = &report.users.value;

        let genders = match &users.genders {
            Availability::Available(counts) => Availability::Available(JsonCounts {
                counts: counts.clone(),
            }),
            Availability::Unavailable => Availability::Unavailable,
        };
        let birth_years = match &users.birth_years {
            Availability::Available(years) => Availability::Available(JsonBirthYears::from(years)),
            Availability::Unavailable => Availability::Unavailable,
        };

        let output = JsonReport {
            filters: JsonFilters {
                city: report.filters.city.to_string(),
                month: report.filters.month.to_string(),
                day: report.filters.day.to_string(),
            },
            trips: report.trips,
            time: JsonTimeStats {
                common_month: time.common_month.and_then(month_name),
                common_day: time.common_day.map(weekday_name),
                common_start_hour: time.common_start_hour,
                elapsed_seconds: self.elapsed(&report.time),
            },
            stations: JsonStationStats {
                common_start: stations.common_start.clone(),
                common_end: stations.common_end.clone(),
                common_trip: stations.common_trip.as_ref().map(|pair| JsonStationPair {
                    start: pair.start.clone(),
                    end: pair.end.clone(),
                }),
                elapsed_seconds: self.elapsed(&report.stations),
            },
            durations: JsonDurationStats {
                total_seconds: durations.total,
                mean_seconds: durations.mean,
                elapsed_seconds: self.elapsed(&report.durations),
            },
            users: JsonUserStats {
                user_types: users.user_types.clone(),
                genders: JsonOptionalColumn::from(&genders),
                birth_years: JsonOptionalColumn::from(&birth_years),
                elapsed_seconds: self.elapsed(&report.users),
            },
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

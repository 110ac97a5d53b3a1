//! Validated user choices: which city to load and which month/day to keep.

mod calendar;
mod city;

pub use calendar::{DayFilter, MONTHS, MonthFilter, WEEKDAYS, month_name, weekday_name};
pub use city::{CITY_CATALOG, City};

use std::fmt;

/// The three answers that select one filtered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filters {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

impl Filters {
    #[must_use]
    pub const fn new(city: City, month: MonthFilter, day: DayFilter) -> Self {
        Self { city, month, day }
    }

    /// All trips for a city.
    #[must_use]
    pub const fn unfiltered(city: City) -> Self {
        Self::new(city, MonthFilter::All, DayFilter::All)
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "city={}, month={}, day={}", self.city, self.month, self.day)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

/// One row of a city's trip export.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Seconds, `None` when the cell is empty.
    pub trip_duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
    /// Derived from `start_time`, 1..=12.
    pub month: u32,
    /// Derived from `start_time`.
    pub day: Weekday,
}

impl TripRecord {
    /// Build a record, deriving the calendar fields from the start timestamp.
    #[must_use]
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        trip_duration: Option<f64>,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time,
            trip_duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: None,
            gender: None,
            birth_year: None,
            month: start_time.month(),
            day: start_time.weekday(),
        }
    }

    #[must_use]
    pub fn with_user_type(mut self, user_type: Option<String>) -> Self {
        self.user_type = user_type;
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: Option<String>) -> Self {
        self.gender = gender;
        self
    }

    #[must_use]
    pub const fn with_birth_year(mut self, birth_year: Option<i32>) -> Self {
        self.birth_year = birth_year;
        self
    }

    /// Hour of day the trip started, 0..=23.
    #[must_use]
    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }
}

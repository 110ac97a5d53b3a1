use chrono::Weekday;

use crate::dataset::TripTable;
use crate::filter::WEEKDAYS;

use super::mode::mode;

/// Most frequent times of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeStats {
    /// 1..=12
    pub common_month: Option<u32>,
    pub common_day: Option<Weekday>,
    /// 0..=23
    pub common_start_hour: Option<u32>,
}

impl TimeStats {
    /// Ties resolve to the earliest month, the earliest weekday (Monday first)
    /// and the earliest hour.
    #[must_use]
    pub fn compute(table: &TripTable) -> Self {
        let common_day = mode(table.iter().map(|r| r.day.num_days_from_monday()))
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| WEEKDAYS.get(index).copied());

        Self {
            common_month: mode(table.iter().map(|r| r.month)),
            common_day,
            common_start_hour: mode(table.iter().map(crate::dataset::TripRecord::start_hour)),
        }
    }
}

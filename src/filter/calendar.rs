use std::fmt;
use std::str::FromStr;

use chrono::{Month, Weekday};

use crate::error::{BikeshareError, Result};

/// Months covered by the published datasets, in calendar order.
pub const MONTHS: [&str; 6] = ["january", "february", "march", "april", "may", "june"];

pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Title-cased weekday name ("Monday").
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Title-cased month name for a 1-based month number, `None` outside 1..=12.
#[must_use]
pub fn month_name(number: u32) -> Option<&'static str> {
    u8::try_from(number)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .map(|month| month.name())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    /// Always one of January..June.
    Only(Month),
}

impl MonthFilter {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let wanted = input.trim().to_lowercase();
        if wanted == "all" {
            return Some(Self::All);
        }
        let index = MONTHS.iter().position(|m| *m == wanted)?;
        let number = u8::try_from(index + 1).ok()?;
        Month::try_from(number).ok().map(Self::Only)
    }

    /// 1-based month number, `None` for `All`.
    #[must_use]
    pub fn number(self) -> Option<u32> {
        match self {
            Self::All => None,
            Self::Only(month) => Some(month.number_from_month()),
        }
    }

    #[must_use]
    pub fn matches(self, month: u32) -> bool {
        self.number().is_none_or(|wanted| wanted == month)
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(month) => f.write_str(&month.name().to_lowercase()),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| BikeshareError::InvalidFilter {
            field: "month",
            value: s.to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Only(Weekday),
}

impl DayFilter {
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let wanted = input.trim().to_lowercase();
        if wanted == "all" {
            return Some(Self::All);
        }
        WEEKDAYS
            .into_iter()
            .find(|day| weekday_name(*day).to_lowercase() == wanted)
            .map(Self::Only)
    }

    #[must_use]
    pub fn matches(self, day: Weekday) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == day,
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(day) => f.write_str(&weekday_name(*day).to_lowercase()),
        }
    }
}

impl FromStr for DayFilter {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| BikeshareError::InvalidFilter {
            field: "day",
            value: s.to_string(),
        })
    }
}

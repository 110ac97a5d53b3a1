use crate::filter::{City, DayFilter, MonthFilter};

/// Outcome of checking one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T> {
    Valid(T),
    /// Ask again after showing this message.
    Retry(&'static str),
}

pub const CITY_QUESTION: &str = "Please enter the city (chicago, new york city or washington): ";
pub const MONTH_QUESTION: &str =
    "Please enter a month in the first six months (all, january, february, ... , june): ";
pub const DAY_QUESTION: &str = "Please enter the day (all, monday, tuesday, ... sunday): ";

pub const INVALID_CITY: &str =
    "Invalid city. Please enter one of those (chicago, new york city, washington)!";
pub const INVALID_MONTH: &str =
    "Invalid month. Please enter a month in the first six months (all, january, february, ... , june)!";
pub const INVALID_DAY: &str =
    "Invalid day. Please enter a day of the week (all, monday, tuesday, ... sunday)!";

#[must_use]
pub fn validate_city(input: &str) -> Validation<City> {
    City::parse(input).map_or(Validation::Retry(INVALID_CITY), Validation::Valid)
}

#[must_use]
pub fn validate_month(input: &str) -> Validation<MonthFilter> {
    MonthFilter::parse(input).map_or(Validation::Retry(INVALID_MONTH), Validation::Valid)
}

#[must_use]
pub fn validate_day(input: &str) -> Validation<DayFilter> {
    DayFilter::parse(input).map_or(Validation::Retry(INVALID_DAY), Validation::Valid)
}

/// Only the exact word "yes" (any case) counts as agreement.
#[must_use]
pub fn is_yes(input: &str) -> bool {
    input.eq_ignore_ascii_case("yes")
}

//! Loading a city's trip export and narrowing it to the requested month/day.

mod loader;
mod record;
mod table;
mod timestamp;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use loader::TripLoader;
pub use record::TripRecord;
pub use table::{
    BIRTH_YEAR, Columns, END_STATION, END_TIME, GENDER, START_STATION, START_TIME, TRIP_DURATION,
    TripTable, USER_TYPE,
};
pub use timestamp::parse_timestamp;

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;

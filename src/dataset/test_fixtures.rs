//! Shared trip data for dataset, stats and output tests.

use std::path::Path;

use super::{TripRecord, TripTable, parse_timestamp};

/// Chicago-style export: leading index column, Gender and Birth Year present,
/// one row with both optional cells empty.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-01 09:07:57,2017-01-01 09:20:53,776,Canal St & Adams St,Clinton St & Lake St,Subscriber,Male,1992.0
1,2017-01-02 09:15:00,2017-01-02 09:30:00,900,Canal St & Adams St,Clinton St & Lake St,Subscriber,Female,1985.0
2,2017-03-06 17:00:00,2017-03-06 17:10:00,600,Clinton St & Lake St,Canal St & Adams St,Customer,,
3,2017-03-07 17:30:00,2017-03-07 17:45:00,900,Streeter Dr & Grand Ave,Canal St & Adams St,Subscriber,Male,1992.0
4,2017-03-10 09:05:00,2017-03-10 09:25:00,1200,Streeter Dr & Grand Ave,Streeter Dr & Grand Ave,Customer,Female,1970.0
";

/// Washington-style export: no Gender or Birth Year columns, fractional durations.
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-03-06 08:15:00,2017-03-06 08:25:00,600.5,Lincoln Memorial,Jefferson Dr & 14th St SW,Subscriber
1,2017-03-06 17:40:00,2017-03-06 17:45:00,300,Jefferson Dr & 14th St SW,Lincoln Memorial,Customer
2,2017-03-07 08:05:00,2017-03-07 08:20:00,900,Lincoln Memorial,Jefferson Dr & 14th St SW,Subscriber
3,2017-01-02 09:00:00,2017-01-02 09:20:00,1200,Lincoln Memorial,Union Station,Subscriber
4,2017-06-05 10:00:00,2017-06-05 10:01:00,60,Union Station,Union Station,Customer
";

/// New York City export: same columns as Chicago, spread over several months and weekdays.
pub const NEW_YORK_CITY_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-03 07:45:00,2017-01-03 08:00:00,900,W 21 St & 6 Ave,E 17 St & Broadway,Subscriber,Female,1980.0
1,2017-02-11 13:00:00,2017-02-11 13:30:00,1800,Central Park S & 6 Ave,Central Park S & 6 Ave,Customer,,
2,2017-04-19 18:20:00,2017-04-19 18:35:00,900,E 17 St & Broadway,W 21 St & 6 Ave,Subscriber,Male,1975.0
3,2017-05-28 11:00:00,2017-05-28 11:12:00,720,W 21 St & 6 Ave,E 17 St & Broadway,Subscriber,Male,1990.0
4,2017-06-30 22:05:00,2017-06-30 22:20:00,900,Central Park S & 6 Ave,W 21 St & 6 Ave,Customer,Female,1995.0
";

pub fn table(csv: &str) -> TripTable {
    TripTable::from_reader(csv.as_bytes(), Path::new("fixture.csv")).unwrap()
}

pub fn chicago() -> TripTable {
    table(CHICAGO_CSV)
}

pub fn washington() -> TripTable {
    table(WASHINGTON_CSV)
}

pub fn new_york_city() -> TripTable {
    table(NEW_YORK_CITY_CSV)
}

/// A trip with only the fields the reporters look at.
pub fn trip(start: &str, from: &str, to: &str, duration: f64) -> TripRecord {
    let start_time = parse_timestamp(start).unwrap();
    TripRecord::new(start_time, start_time, Some(duration), from, to)
}

use std::fmt;
use std::str::FromStr;

use crate::error::{BikeshareError, Result};

/// A city with published trip data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

/// City name to source file. The files are resolved against the data directory.
pub const CITY_CATALOG: [(City, &str); 3] = [
    (City::Chicago, "chicago.csv"),
    (City::NewYorkCity, "new_york_city.csv"),
    (City::Washington, "washington.csv"),
];

impl City {
    pub const ALL: [Self; 3] = [Self::Chicago, Self::NewYorkCity, Self::Washington];

    /// Lower-case name as typed by the user.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }

    /// Name of the CSV file holding this city's trips.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        CITY_CATALOG
            .iter()
            .find(|(city, _)| *city == self)
            .map_or("", |(_, file)| file)
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let wanted = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|city| city.name() == wanted)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for City {
    type Err = BikeshareError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| BikeshareError::InvalidFilter {
            field: "city",
            value: s.to_string(),
        })
    }
}

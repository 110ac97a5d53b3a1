use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{BikeshareError, Result};
use crate::filter::{DayFilter, MonthFilter};

use super::record::TripRecord;
use super::timestamp::parse_timestamp;

pub const START_TIME: &str = "Start Time";
pub const END_TIME: &str = "End Time";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

/// Which optional columns the source file carried.
///
/// Washington exports have neither; the other cities have both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Columns {
    gender: bool,
    birth_year: bool,
}

impl Columns {
    #[must_use]
    pub const fn new(gender: bool, birth_year: bool) -> Self {
        Self { gender, birth_year }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self::new(true, true)
    }

    #[must_use]
    pub const fn has_gender(self) -> bool {
        self.gender
    }

    #[must_use]
    pub const fn has_birth_year(self) -> bool {
        self.birth_year
    }
}

/// Positions of the known columns inside a CSV header row.
struct HeaderIndex {
    start_time: usize,
    end_time: usize,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl HeaderIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| BikeshareError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
        };

        Ok(Self {
            start_time: require(START_TIME)?,
            end_time: require(END_TIME)?,
            trip_duration: require(TRIP_DURATION)?,
            start_station: require(START_STATION)?,
            end_station: require(END_STATION)?,
            user_type: require(USER_TYPE)?,
            gender: find(GENDER),
            birth_year: find(BIRTH_YEAR),
        })
    }

    const fn columns(&self) -> Columns {
        Columns::new(self.gender.is_some(), self.birth_year.is_some())
    }
}

/// Parses fields of one CSV row, attaching file/line context to failures.
struct RowParser<'a> {
    row: &'a StringRecord,
    path: &'a Path,
}

impl RowParser<'_> {
    fn get(&self, index: usize) -> &str {
        self.row.get(index).unwrap_or("")
    }

    fn optional(&self, index: Option<usize>) -> Option<&str> {
        index.map(|i| self.get(i)).filter(|value| !value.is_empty())
    }

    fn invalid(&self, column: &str, value: &str) -> BikeshareError {
        BikeshareError::InvalidField {
            path: self.path.to_path_buf(),
            line: self.row.position().map_or(0, csv::Position::line),
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    fn timestamp(&self, index: usize, column: &str) -> Result<chrono::NaiveDateTime> {
        let value = self.get(index);
        parse_timestamp(value).ok_or_else(|| self.invalid(column, value))
    }

    /// An empty cell is a missing duration; anything else must be a finite number.
    fn duration(&self, index: usize) -> Result<Option<f64>> {
        let Some(value) = self.optional(Some(index)) else {
            return Ok(None);
        };
        value
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite())
            .map(Some)
            .ok_or_else(|| self.invalid(TRIP_DURATION, value))
    }

    /// Birth years are exported as floats (`1989.0`) in some files.
    #[allow(clippy::cast_possible_truncation)] // whole-number check precedes the cast
    fn birth_year(&self, index: Option<usize>) -> Result<Option<i32>> {
        let Some(value) = self.optional(index) else {
            return Ok(None);
        };
        if let Ok(year) = value.parse::<i32>() {
            return Ok(Some(year));
        }
        match value.parse::<f64>() {
            Ok(year) if year.is_finite() && year.fract() == 0.0 && year.abs() < 10_000.0 => {
                Ok(Some(year as i32))
            }
            _ => Err(self.invalid(BIRTH_YEAR, value)),
        }
    }

    fn record(&self, index: &HeaderIndex) -> Result<TripRecord> {
        let start_time = self.timestamp(index.start_time, START_TIME)?;
        let end_time = self.timestamp(index.end_time, END_TIME)?;
        let trip_duration = self.duration(index.trip_duration)?;

        Ok(TripRecord::new(
            start_time,
            end_time,
            trip_duration,
            self.get(index.start_station),
            self.get(index.end_station),
        )
        .with_user_type(self.optional(Some(index.user_type)).map(str::to_string))
        .with_gender(self.optional(index.gender).map(str::to_string))
        .with_birth_year(self.birth_year(index.birth_year)?))
    }
}

/// Trip records of one city, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TripTable {
    records: Vec<TripRecord>,
    columns: Columns,
}

impl TripTable {
    #[must_use]
    pub const fn new(records: Vec<TripRecord>, columns: Columns) -> Self {
        Self { records, columns }
    }

    /// Parse a CSV export with a header row.
    ///
    /// `source` is only used to label errors.
    ///
    /// # Errors
    /// Returns an error if a required column is missing, the CSV is malformed,
    /// or a timestamp/duration/birth year cannot be parsed.
    pub fn from_reader<R: Read>(reader: R, source: &Path) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let csv_error = |source_err| BikeshareError::Csv {
            path: source.to_path_buf(),
            source: source_err,
        };

        let headers = csv_reader.headers().map_err(csv_error)?.clone();
        let index = HeaderIndex::from_headers(&headers, source)?;

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row.map_err(csv_error)?;
            let parser = RowParser { row: &row, path: source };
            records.push(parser.record(&index)?);
        }

        Ok(Self::new(records, index.columns()))
    }

    /// Keep only trips that started in the requested month and on the requested day.
    #[must_use]
    pub fn filter(self, month: MonthFilter, day: DayFilter) -> Self {
        let records = self
            .records
            .into_iter()
            .filter(|r| month.matches(r.month) && day.matches(r.day))
            .collect();
        Self::new(records, self.columns)
    }

    #[must_use]
    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    #[must_use]
    pub const fn columns(&self) -> Columns {
        self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TripRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a TripTable {
    type Item = &'a TripRecord;
    type IntoIter = std::slice::Iter<'a, TripRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

use std::fmt::Write;

use crate::dataset::{
    BIRTH_YEAR, Columns, END_STATION, END_TIME, GENDER, START_STATION, START_TIME, TRIP_DURATION,
    TripRecord, USER_TYPE,
};
use crate::pager::Page;

use super::text::format_seconds;

const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";
const EMPTY_CELL: &str = "-";

/// Renders pages of raw trip rows, one labelled block per row.
pub struct PageFormatter {
    columns: Columns,
}

impl PageFormatter {
    #[must_use]
    pub const fn new(columns: Columns) -> Self {
        Self { columns }
    }

    #[must_use]
    pub fn format(&self, page: &Page<'_>) -> String {
        let mut output = String::new();

        if page.is_empty() {
            output.push_str("No more trip data to display.\n");
            return output;
        }

        for (i, record) in page.rows.iter().enumerate() {
            let _ = writeln!(output, "Trip #{}", page.offset + i);
            self.write_record(&mut output, record);
            output.push('\n');
        }
        output
    }

    fn write_record(&self, output: &mut String, record: &TripRecord) {
        let cell = |value: Option<&str>| value.unwrap_or(EMPTY_CELL).to_string();

        let _ = writeln!(
            output,
            "  {START_TIME}: {}",
            record.start_time.format(TIMESTAMP_LAYOUT)
        );
        let _ = writeln!(
            output,
            "  {END_TIME}: {}",
            record.end_time.format(TIMESTAMP_LAYOUT)
        );
        let duration = record.trip_duration.map(format_seconds);
        let _ = writeln!(output, "  {TRIP_DURATION}: {}", cell(duration.as_deref()));
        let station = |name: &str| cell(Some(name).filter(|n| !n.is_empty()));
        let _ = writeln!(output, "  {START_STATION}: {}", station(&record.start_station));
        let _ = writeln!(output, "  {END_STATION}: {}", station(&record.end_station));
        let _ = writeln!(output, "  {USER_TYPE}: {}", cell(record.user_type.as_deref()));
        if self.columns.has_gender() {
            let _ = writeln!(output, "  {GENDER}: {}", cell(record.gender.as_deref()));
        }
        if self.columns.has_birth_year() {
            let year = record.birth_year.map(|y| y.to_string());
            let _ = writeln!(output, "  {BIRTH_YEAR}: {}", cell(year.as_deref()));
        }
    }
}

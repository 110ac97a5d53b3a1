use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::filter::{month_name, weekday_name};
use crate::stats::{
    Availability, CategoryCount, DurationStats, StationStats, TimeStats, TripReport, UserStats,
    format_duration,
};

use super::{ColorMode, ReportFormatter, SEPARATOR, ansi};

const NO_DATA: &str = "no data";

pub struct ReportTextFormatter {
    use_colors: bool,
    show_timing: bool,
}

impl Default for ReportTextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportTextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(std::io::IsTerminal::is_terminal(&std::io::stdout())),
            show_timing: true,
        }
    }

    #[must_use]
    pub const fn with_timing(mut self, show: bool) -> Self {
        self.show_timing = show;
        self
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn value_or_no_data(&self, value: Option<String>) -> String {
        value.unwrap_or_else(|| self.paint(NO_DATA, ansi::YELLOW))
    }

    fn section_header(&self, output: &mut Vec<u8>, title: &str) {
        writeln!(output).ok();
        writeln!(output, "{}", self.paint(title, ansi::CYAN)).ok();
        writeln!(output).ok();
    }

    fn section_footer(&self, output: &mut Vec<u8>, elapsed: Duration) {
        if self.show_timing {
            writeln!(output).ok();
            writeln!(output, "This took {:.6} seconds.", elapsed.as_secs_f64()).ok();
        }
        writeln!(output, "{SEPARATOR}").ok();
    }

    fn write_time(&self, output: &mut Vec<u8>, stats: &TimeStats) {
        let month = stats.common_month.and_then(month_name).map(str::to_string);
        let day = stats.common_day.map(|d| weekday_name(d).to_string());
        let hour = stats.common_start_hour.map(|h| h.to_string());

        writeln!(output, "Most common month: {}", self.value_or_no_data(month)).ok();
        writeln!(output, "Most common day: {}", self.value_or_no_data(day)).ok();
        writeln!(output, "Most common start hour: {}", self.value_or_no_data(hour)).ok();
    }

    fn write_stations(&self, output: &mut Vec<u8>, stats: &StationStats) {
        writeln!(
            output,
            "Most commonly used start station: {}",
            self.value_or_no_data(stats.common_start.clone())
        )
        .ok();
        writeln!(
            output,
            "Most commonly used end station: {}",
            self.value_or_no_data(stats.common_end.clone())
        )
        .ok();
        writeln!(
            output,
            "Most frequent trip: {}",
            self.value_or_no_data(stats.common_trip.as_ref().map(ToString::to_string))
        )
        .ok();
    }

    fn write_durations(&self, output: &mut Vec<u8>, stats: &DurationStats) {
        writeln!(
            output,
            "Total travel time: {} seconds ({})",
            format_seconds(stats.total),
            format_duration(stats.total)
        )
        .ok();
        let mean = stats
            .mean
            .map(|mean| format!("{} seconds ({})", format_seconds(mean), format_duration(mean)));
        writeln!(output, "Mean travel time: {}", self.value_or_no_data(mean)).ok();
    }

    fn write_counts(&self, output: &mut Vec<u8>, counts: &[CategoryCount]) {
        if counts.is_empty() {
            writeln!(output, "  {}", self.paint(NO_DATA, ansi::YELLOW)).ok();
        }
        for count in counts {
            writeln!(output, "  {}: {}", count.label, count.count).ok();
        }
    }

    fn write_users(&self, output: &mut Vec<u8>, stats: &UserStats) {
        writeln!(output, "Counts of user types:").ok();
        self.write_counts(output, &stats.user_types);

        match &stats.genders {
            Availability::Available(genders) => {
                writeln!(output, "Counts of genders:").ok();
                self.write_counts(output, genders);
            }
            Availability::Unavailable => {
                let message = self.paint("Gender data not available for this city.", ansi::YELLOW);
                writeln!(output, "{message}").ok();
            }
        }

        match &stats.birth_years {
            Availability::Available(years) => {
                let year = |y: Option<i32>| self.value_or_no_data(y.map(|y| y.to_string()));
                writeln!(output, "Earliest year of birth: {}", year(years.earliest)).ok();
                writeln!(output, "Most recent year of birth: {}", year(years.most_recent)).ok();
                writeln!(output, "Most common year of birth: {}", year(years.most_common)).ok();
            }
            Availability::Unavailable => {
                let message =
                    self.paint("Birth year data not available for this city.", ansi::YELLOW);
                writeln!(output, "{message}").ok();
            }
        }
    }
}

impl ReportFormatter for ReportTextFormatter {
    fn format(&self, report: &TripReport) -> Result<String> {
        let mut output = Vec::new();

        writeln!(
            output,
            "Analyzing {} trips ({})",
            report.trips, report.filters
        )
        .ok();
        writeln!(output, "{SEPARATOR}").ok();

        self.section_header(&mut output, "Calculating The Most Frequent Times of Travel...");
        self.write_time(&mut output, &report.time.value);
        self.section_footer(&mut output, report.time.elapsed);

        self.section_header(&mut output, "Calculating The Most Popular Stations and Trip...");
        self.write_stations(&mut output, &report.stations.value);
        self.section_footer(&mut output, report.stations.elapsed);

        self.section_header(&mut output, "Calculating Trip Duration...");
        self.write_durations(&mut output, &report.durations.value);
        self.section_footer(&mut output, report.durations.elapsed);

        self.section_header(&mut output, "Calculating User Stats...");
        self.write_users(&mut output, &report.users.value);
        self.section_footer(&mut output, report.users.elapsed);

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

/// Seconds with at most two decimals and no trailing zeros (`875.2`, `4376`).
#[must_use]
pub(crate) fn format_seconds(seconds: f64) -> String {
    let text = format!("{seconds:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

//! Trip duration totals, and rendering of second counts such as `1d 2h 3m 4s`.

use crate::dataset::TripTable;

/// Seconds per time unit.
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_DAY: u64 = 86400;

/// Total and mean trip duration, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DurationStats {
    /// Trips with a recorded duration; rows with an empty cell are skipped.
    pub trips: usize,
    pub total: f64,
    /// `None` when there are no trips.
    pub mean: Option<f64>,
}

impl DurationStats {
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Precision loss is acceptable for average calculation
    pub fn compute(table: &TripTable) -> Self {
        let (trips, total) = table
            .iter()
            .filter_map(|r| r.trip_duration)
            .fold((0, 0.0), |(count, sum), d| (count + 1, sum + d));
        let mean = (trips > 0).then(|| total / trips as f64);

        Self { trips, total, mean }
    }
}

/// Render a second count with day/hour/minute/second units, e.g. `1d 2h 3m 4s`.
///
/// Fractional seconds are rounded; zero and negative input render as `0s`.
///
/// # Examples
/// ```ignore
/// assert_eq!(format_duration(3725.0), "1h 2m 5s");
/// assert_eq!(format_duration(90061.0), "1d 1h 1m 1s");
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to >= 0 and rounded
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0s".to_string();
    }
    let mut remaining = seconds.round() as u64;

    let mut parts = Vec::new();
    for (unit, size) in [
        ("d", SECONDS_PER_DAY),
        ("h", SECONDS_PER_HOUR),
        ("m", SECONDS_PER_MINUTE),
    ] {
        let count = remaining / size;
        if count > 0 {
            parts.push(format!("{count}{unit}"));
            remaining %= size;
        }
    }
    if remaining > 0 || parts.is_empty() {
        parts.push(format!("{remaining}s"));
    }

    parts.join(" ")
}

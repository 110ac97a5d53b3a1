use chrono::NaiveDateTime;

/// Layouts seen in the published trip exports, tried in order.
const LAYOUTS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Parse a trip timestamp such as `"2017-01-01 09:07:57"`.
///
/// Returns `None` when the text matches none of the known layouts.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(s, layout).ok())
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;

    #[test]
    fn parses_dataset_layout() {
        let ts = parse_timestamp("2017-01-01 09:07:57").unwrap();
        assert_eq!(ts.year(), 2017);
        assert_eq!(ts.month(), 1);
        assert_eq!(ts.hour(), 9);
        assert_eq!(ts.second(), 57);
    }

    #[test]
    fn parses_fractional_seconds() {
        let ts = parse_timestamp("2017-06-21 08:36:34.123").unwrap();
        assert_eq!(ts.minute(), 36);
    }

    #[test]
    fn parses_iso_and_us_layouts() {
        assert!(parse_timestamp("2017-03-05T17:00:00").is_some());
        assert_eq!(parse_timestamp("3/5/2017 17:00").unwrap().day(), 5);
        assert_eq!(parse_timestamp("03/05/2017 17:00:12").unwrap().second(), 12);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2017-13-01 00:00:00").is_none());
    }
}

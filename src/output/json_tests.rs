use serde_json::Value;

use crate::dataset::test_fixtures::{chicago, washington};
use crate::filter::{City, Filters};
use crate::output::{ReportFormatter, ReportJsonFormatter};
use crate::stats::TripReport;

fn parse(report: &TripReport, timing: bool) -> Value {
    let output = ReportJsonFormatter::new()
        .with_timing(timing)
        .format(report)
        .unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn json_formatter_full_report() {
    let report = TripReport::compute(Filters::unfiltered(City::Chicago), &chicago());
    let json = parse(&report, false);

    assert_eq!(json["filters"]["city"], "chicago");
    assert_eq!(json["filters"]["month"], "all");
    assert_eq!(json["trips"], 5);
    assert_eq!(json["time"]["common_month"], "March");
    assert_eq!(json["time"]["common_day"], "Monday");
    assert_eq!(json["time"]["common_start_hour"], 9);
    assert_eq!(json["stations"]["common_trip"]["start"], "Canal St & Adams St");
    assert_eq!(json["stations"]["common_trip"]["end"], "Clinton St & Lake St");
    assert_eq!(json["durations"]["total_seconds"], 4376.0);
    assert_eq!(json["users"]["user_types"][0]["label"], "Subscriber");
    assert_eq!(json["users"]["user_types"][0]["count"], 3);
    assert_eq!(json["users"]["genders"]["available"], true);
    assert_eq!(json["users"]["genders"]["counts"][1]["label"], "Female");
    assert_eq!(json["users"]["birth_years"]["earliest"], 1970);
}

#[test]
fn json_formatter_unavailable_columns() {
    let report = TripReport::compute(Filters::unfiltered(City::Washington), &washington());
    let json = parse(&report, false);

    assert_eq!(json["users"]["genders"]["available"], false);
    assert!(json["users"]["genders"].get("counts").is_none());
    assert_eq!(json["users"]["birth_years"]["available"], false);
    assert!(json["users"]["birth_years"].get("earliest").is_none());
}

#[test]
fn json_formatter_no_data_is_null() {
    let report = TripReport::compute(
        Filters::unfiltered(City::Chicago),
        &crate::dataset::TripTable::default(),
    );
    let json = parse(&report, false);

    assert!(json["time"]["common_month"].is_null());
    assert!(json["stations"]["common_start"].is_null());
    assert!(json["durations"]["mean_seconds"].is_null());
    assert!(json["durations"]["total_seconds"].as_f64().unwrap().is_sign_positive());
}

#[test]
fn json_formatter_timing_toggle() {
    let report = TripReport::compute(Filters::unfiltered(City::Chicago), &chicago());

    let with_timing = parse(&report, true);
    assert!(with_timing["time"]["elapsed_seconds"].is_number());
    assert!(with_timing["users"]["elapsed_seconds"].is_number());

    let without = parse(&report, false);
    assert!(without["time"].get("elapsed_seconds").is_none());
}

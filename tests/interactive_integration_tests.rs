//! Integration tests for the interactive explore loop driven through stdin.

mod common;

use common::{GREETING, RESTART_QUESTION, TestFixture, VIEW_QUESTION};
use predicates::prelude::*;

#[test]
fn full_round_prints_report_and_exits_cleanly() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(GREETING))
        .stdout(predicate::str::contains("Analyzing 6 trips"))
        .stdout(predicate::str::contains("Calculating The Most Frequent Times of Travel..."))
        .stdout(predicate::str::contains("Most common month: March"))
        .stdout(predicate::str::contains("Most frequent trip: Canal St & Adams St -> Clinton St & Lake St"))
        .stdout(predicate::str::contains("Counts of user types:\n  Subscriber: 4\n  Customer: 2"))
        .stdout(predicate::str::contains("This took"))
        .stdout(predicate::str::contains(RESTART_QUESTION));
}

#[test]
fn invalid_input_is_asked_again() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .write_stdin("boston\nchicago\njuly\nmarch\nfunday\nmonday\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid city."))
        .stdout(predicate::str::contains("Invalid month."))
        .stdout(predicate::str::contains("Invalid day."))
        .stdout(predicate::str::contains("Analyzing 1 trips (city=chicago, month=march, day=monday)"));
}

#[test]
fn pager_shows_five_rows_then_the_rest() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .write_stdin("chicago\nall\nall\nyes\nyes\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip #0\n  Start Time: 2017-01-01 09:07:57"))
        .stdout(predicate::str::contains("Trip #4\n"))
        .stdout(predicate::str::contains("Trip #5\n  Start Time: 2017-06-05 08:00:00"))
        .stdout(predicate::str::contains("Trip #6").not())
        .stdout(predicate::str::contains("No more trip data to display."));
}

#[test]
fn restart_runs_another_round() {
    let fixture = TestFixture::with_cities();

    let output = fixture
        .command()
        .write_stdin("chicago\nall\nall\nno\nyes\nwashington\nall\nmonday\nno\nno\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert_eq!(stdout.matches(GREETING).count(), 2);
    assert!(stdout.contains("Analyzing 2 trips (city=washington, month=all, day=monday)"));
    assert!(stdout.contains("Gender data not available for this city."));
    assert!(stdout.contains("Birth year data not available for this city."));
}

#[test]
fn closed_stdin_ends_session() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .write_stdin("chicago\nall\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing").not());
}

#[test]
fn empty_selection_reports_no_data() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .write_stdin("washington\njune\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Analyzing 0 trips"))
        .stdout(predicate::str::contains("Most common day: no data"))
        .stdout(predicate::str::contains("Mean travel time: no data"))
        .stdout(predicate::str::contains("No more trip data to display."));
}

#[test]
fn missing_city_file_exits_with_data_error() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .write_stdin("new york city\nall\nall\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✖ DatasetNotFound"))
        .stderr(predicate::str::contains("new_york_city.csv"))
        .stderr(predicate::str::contains("help:"));
}

#[test]
fn quiet_suppresses_greeting() {
    let fixture = TestFixture::with_cities();

    fixture
        .command()
        .arg("-q")
        .write_stdin("chicago\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(GREETING).not())
        .stdout(predicate::str::contains(VIEW_QUESTION));
}

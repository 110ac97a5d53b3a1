use super::*;
use crate::dataset::test_fixtures::chicago;
use crate::filter::{City, Filters};

#[test]
fn output_format_from_str() {
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
}

#[test]
fn output_format_unknown() {
    assert!("sarif".parse::<OutputFormat>().is_err());
}

#[test]
fn output_format_default_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}

#[test]
fn output_format_selects_formatter() {
    let report = TripReport::compute(Filters::unfiltered(City::Chicago), &chicago());

    let text = OutputFormat::Text
        .formatter(ColorMode::Never, false)
        .format(&report)
        .unwrap();
    assert!(text.contains("Calculating Trip Duration..."));

    let json = OutputFormat::Json
        .formatter(ColorMode::Never, false)
        .format(&report)
        .unwrap();
    assert!(json.trim_start().starts_with('{'));
}

#[test]
fn color_mode_explicit_ignores_terminal() {
    assert!(ColorMode::Always.use_colors(false));
    assert!(!ColorMode::Never.use_colors(true));
}

#[test]
fn color_mode_auto_without_terminal() {
    assert!(!ColorMode::Auto.use_colors(false));
}

#[test]
fn modes_deserialize_lowercase() {
    #[derive(serde::Deserialize)]
    struct Wrapper {
        format: OutputFormat,
        color: ColorMode,
    }

    let parsed: Wrapper = toml::from_str("format = \"json\"\ncolor = \"never\"").unwrap();
    assert_eq!(parsed.format, OutputFormat::Json);
    assert_eq!(parsed.color, ColorMode::Never);
}

#[test]
fn separator_width() {
    assert_eq!(SEPARATOR.len(), 40);
}

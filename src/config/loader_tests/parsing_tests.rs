//! Tests for rejecting malformed configuration files.

use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

fn load(content: &str) -> crate::error::Result<crate::config::LoadResult> {
    let fs = MockFileSystem::new().with_file("/project/.bikeshare.toml", content);
    FileConfigLoader::with_fs(fs).load()
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = load("[data\ndir = 1").unwrap_err();
    assert_eq!(err.error_type(), "TomlParse");
    assert!(err.suggestion().is_some());
}

#[test]
fn unknown_key_is_rejected() {
    let err = load("[output]\nverbose = true\n").unwrap_err();
    assert_eq!(err.error_type(), "TomlParse");
    assert!(err.to_string().contains("verbose"));
}

#[test]
fn wrong_value_type_is_rejected() {
    let err = load("[output]\ntiming = \"yes\"\n").unwrap_err();
    assert_eq!(err.error_type(), "TomlParse");
}

#[test]
fn invalid_color_mode_is_not_a_data_error() {
    let fs = MockFileSystem::new().with_file("/cfg.toml", "[output]\ncolor = \"rainbow\"\n");
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/cfg.toml"))
        .unwrap_err();
    assert_eq!(err.error_type(), "TomlParse");
    assert!(!err.is_data_error());
}

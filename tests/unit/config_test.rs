//! Tests for compilation options and TOML loading

use std::fs;

use pathrex::{ConfigError, Options};
use tempfile::TempDir;

// =============================================================================
// DEFAULTS AND BUILDERS
// =============================================================================

#[test]
fn test_options_default() {
    let options = Options::default();
    assert!(!options.strict);
    assert!(options.end);
    assert!(!options.sensitive);
    assert_eq!(options, Options::new());
}

#[test]
fn test_options_builders() {
    let options = Options::new()
        .with_strict(true)
        .with_end(false)
        .with_sensitive(true);
    assert!(options.strict);
    assert!(!options.end);
    assert!(options.sensitive);
}

// =============================================================================
// TOML PARSING
// =============================================================================

#[test]
fn test_from_toml_top_level() {
    let options = Options::from_toml_str("strict = true\nend = false\n").unwrap();
    assert!(options.strict);
    assert!(!options.end);
    assert!(!options.sensitive);
}

#[test]
fn test_from_toml_options_table() {
    let options = Options::from_toml_str("[options]\nsensitive = true\n").unwrap();
    assert!(options.sensitive);
    assert!(options.end);
}

#[test]
fn test_from_toml_empty_is_default() {
    assert_eq!(Options::from_toml_str("").unwrap(), Options::default());
}

#[test]
fn test_unknown_fields_are_ignored() {
    let options = Options::from_toml_str("strict = true\nmergeParams = true\n").unwrap();
    assert!(options.strict);
}

#[test]
fn test_wrong_type_is_parse_error() {
    let err = Options::from_toml_str("strict = \"yes\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
}

// =============================================================================
// FILE LOADING
// =============================================================================

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pathrex.toml");
    fs::write(&path, "[options]\nstrict = true\n").unwrap();

    let options = Options::load(&path).unwrap();
    assert!(options.strict);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = Options::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

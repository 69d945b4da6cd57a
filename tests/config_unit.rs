//! Unit tests for configuration loading.

use asciipaint::config::{Config, ConfigError};
use std::io::Write;

// ==================== Defaults ====================

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nonexistent.toml");

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.render.output_width, 100);
    assert_eq!(config.ui.font_size, 7.0);
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::File::create(&path).unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.render.output_width, 100);
}

// ==================== Parsing ====================

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "[render]").unwrap();
    writeln!(file, "output_width = 80").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.render.output_width, 80);
    assert_eq!(config.ui.font_size, 7.0);
}

#[test]
fn test_full_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[render]\noutput_width = 120\n\n[ui]\nfont_size = 9.5\n",
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.render.output_width, 120);
    assert_eq!(config.ui.font_size, 9.5);
}

#[test]
fn test_invalid_toml_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is { not toml").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("config.toml"));
}

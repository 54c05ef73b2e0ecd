//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use masak_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_masak_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[model]
temperature = 0.9
max_output_tokens = 1024

[chat]
busy_message = "Sebentar..."
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.temperature, 0.9);
    assert_eq!(config.model.max_output_tokens, 1024);
    assert_eq!(config.chat.busy_message, "Sebentar...");
    // Defaults preserved
    assert_eq!(config.model.name, "gemini-1.5-flash");
    assert_eq!(config.model.timeout_secs, 60);
    assert!(config.persona.instruction.starts_with("Saya adalah ahli masak"));
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_out_of_range_values_is_not_rejected_by_loader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model]\ntemperature = 7.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.temperature, 7.0);
    assert!(crate::validation::validate(&config).is_err());
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("masak").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.model.temperature, 0.4);
    assert_eq!(config.model.max_output_tokens, 500);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn load_or_create_writes_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    assert!(!path.exists());

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_or_create_keeps_parse_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[model\n").unwrap();

    assert!(matches!(
        load_or_create(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn default_template_mentions_secret_location() {
    let toml = super::template::default_config_toml();
    assert!(toml.contains("GEMINI_API_KEY"));
    assert!(toml.contains("[model]"));
}

#[test]
fn default_template_carries_schema_version() {
    let toml = super::template::default_config_toml();
    let header = format!("# Schema version {}\n", crate::CONFIG_SCHEMA_VERSION);
    assert!(toml.starts_with("# Masak Configuration\n"));
    assert!(toml.contains(&header));
    assert!(toml::from_str::<crate::MasakConfig>(&toml).is_ok());
}

#[test]
fn default_config_path_ends_with_masak() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("masak/config.toml"));
    }
}

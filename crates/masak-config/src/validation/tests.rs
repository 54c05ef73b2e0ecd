//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = MasakConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_temperature_out_of_range() {
    let mut config = MasakConfig::default();
    config.model.temperature = 2.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));

    config.model.temperature = -0.1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_nan_temperature() {
    let mut config = MasakConfig::default();
    config.model.temperature = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.temperature"));
}

#[test]
fn catches_zero_max_output_tokens() {
    let mut config = MasakConfig::default();
    config.model.max_output_tokens = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.max_output_tokens"));
}

#[test]
fn catches_timeout_out_of_range() {
    let mut config = MasakConfig::default();
    config.model.timeout_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.timeout_secs"));

    config.model.timeout_secs = 3600;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.timeout_secs"));
}

#[test]
fn catches_non_http_api_base() {
    let mut config = MasakConfig::default();
    config.model.api_base = "ftp://example.com".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.api_base"));
}

#[test]
fn catches_blank_persona() {
    let mut config = MasakConfig::default();
    config.persona.instruction = "   ".into();
    config.persona.acknowledgment = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("persona.instruction"));
    assert!(err.contains("persona.acknowledgment"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = MasakConfig::default();
    config.model.name = String::new();
    config.model.max_output_tokens = 100_000;
    config.chat.input_prompt = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("model.name"));
    assert!(err.contains("model.max_output_tokens"));
    assert!(err.contains("chat.input_prompt"));
    assert_eq!(err.matches("; ").count(), 2);
}

//! Masak configuration system.
//!
//! Provides TOML-based configuration with validation and API credential
//! resolution. All config sections use defaults so partial configs work
//! out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use masak_config::{config_to_json, toml_loader, validation};
//!
//! let config = toml_loader::load_default().expect("failed to load config");
//! validation::validate(&config).expect("invalid config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod secrets;
pub mod toml_loader;
pub mod validation;

pub use schema::{MasakConfig, CONFIG_SCHEMA_VERSION};
pub use secrets::ApiKey;

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &MasakConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

//! Core TOML config loading: read from path or platform default.

use crate::schema::MasakConfig;
use masak_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. Validation is left to the
/// caller so command-line overrides can be applied first.
pub fn load_from_path(path: &Path) -> Result<MasakConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config: MasakConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, writing the documented default file first if
/// nothing exists there yet.
pub fn load_or_create(path: &Path) -> Result<MasakConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(MasakConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/masak/config.toml`
/// On Linux: `~/.config/masak/config.toml`
pub fn load_default() -> Result<MasakConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}

//! API credential resolution.
//!
//! The Gemini key is read once at startup, from the `GEMINI_API_KEY`
//! environment variable or, failing that, from `secrets.toml` in the
//! config directory. A missing or malformed key is a fatal startup error.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use masak_common::ConfigError;
use tracing::{debug, info};

use crate::toml_loader::default_config_dir;

/// Name of both the environment variable and the `secrets.toml` key.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// Validated API key. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validate a raw key string. Surrounding whitespace is trimmed; the
    /// remainder must be non-empty and free of whitespace and control chars.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let key = raw.trim();
        if key.is_empty() {
            return Err(ConfigError::InvalidSecret(format!("{API_KEY_VAR} is empty")));
        }
        if key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ConfigError::InvalidSecret(format!(
                "{API_KEY_VAR} contains whitespace or control characters"
            )));
        }
        Ok(Self(key.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Default location of `secrets.toml`.
pub fn default_secrets_path() -> Result<PathBuf, ConfigError> {
    Ok(default_config_dir()?.join("secrets.toml"))
}

/// Resolve the API key. `env_value` is the caller's reading of
/// `GEMINI_API_KEY`; when present it wins even if invalid, and is never
/// silently replaced by the file.
pub fn resolve_api_key_from(
    env_value: Option<String>,
    secrets_path: &Path,
) -> Result<ApiKey, ConfigError> {
    if let Some(value) = env_value {
        debug!("using {API_KEY_VAR} from environment");
        return ApiKey::parse(&value);
    }

    match read_secrets_file(secrets_path)? {
        Some(secrets) => match secrets.get(API_KEY_VAR) {
            Some(value) => {
                info!("using {API_KEY_VAR} from {}", secrets_path.display());
                ApiKey::parse(value)
            }
            None => Err(missing(secrets_path)),
        },
        None => Err(missing(secrets_path)),
    }
}

fn missing(secrets_path: &Path) -> ConfigError {
    ConfigError::MissingSecret(format!(
        "{API_KEY_VAR} not found; set the environment variable or add it to {}",
        secrets_path.display()
    ))
}

/// Read `secrets.toml` as a flat string table. `Ok(None)` if absent.
fn read_secrets_file(path: &Path) -> Result<Option<HashMap<String, String>>, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::InvalidSecret(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };

    let table: HashMap<String, toml::Value> = toml::from_str(&content).map_err(|e| {
        ConfigError::InvalidSecret(format!("failed to parse {}: {e}", path.display()))
    })?;

    Ok(Some(
        table
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secrets_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn env_value_takes_precedence() {
        let (_dir, path) = secrets_file("GEMINI_API_KEY = \"from-file\"\n");
        let key = resolve_api_key_from(Some("from-env".into()), &path).unwrap();
        assert_eq!(key.expose(), "from-env");
    }

    #[test]
    fn falls_back_to_secrets_file() {
        let (_dir, path) = secrets_file("GEMINI_API_KEY = \"AIzaFileKey\"\n");
        let key = resolve_api_key_from(None, &path).unwrap();
        assert_eq!(key.expose(), "AIzaFileKey");
    }

    #[test]
    fn missing_everywhere_is_missing_secret() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        let err = resolve_api_key_from(None, &path).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret(_)));
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn file_without_key_is_missing_secret() {
        let (_dir, path) = secrets_file("OTHER_KEY = \"x\"\n");
        let err = resolve_api_key_from(None, &path).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSecret(_)));
    }

    #[test]
    fn empty_env_value_is_invalid_not_missing() {
        let (_dir, path) = secrets_file("GEMINI_API_KEY = \"from-file\"\n");
        let err = resolve_api_key_from(Some("   ".into()), &path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSecret(_)));
    }

    #[test]
    fn key_with_inner_whitespace_is_invalid() {
        let err = ApiKey::parse("abc def").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSecret(_)));
    }

    #[test]
    fn key_is_trimmed() {
        let key = ApiKey::parse("  AIzaKey\n").unwrap();
        assert_eq!(key.expose(), "AIzaKey");
    }

    #[test]
    fn malformed_secrets_file_is_invalid_secret() {
        let (_dir, path) = secrets_file("GEMINI_API_KEY = \n");
        let err = resolve_api_key_from(None, &path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSecret(_)));
    }

    #[test]
    fn debug_redacts_key() {
        let key = ApiKey::parse("AIzaSuperSecret").unwrap();
        let debug = format!("{key:?}");
        assert!(!debug.contains("AIzaSuperSecret"));
        assert!(debug.contains("REDACTED"));
    }
}

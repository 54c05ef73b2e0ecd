//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod model;
mod persona;

#[cfg(test)]
mod tests;

use crate::schema::MasakConfig;
use masak_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &MasakConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    model::validate_model(&mut errors, config);
    persona::validate_persona(&mut errors, config);
    persona::validate_chat(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

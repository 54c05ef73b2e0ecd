//! Model provider configuration types.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Generation settings sent with every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub name: String,
    pub api_base: String,
    /// Sampling randomness; lower is more deterministic.
    pub temperature: f64,
    /// Hard cap on reply length.
    pub max_output_tokens: u32,
    /// Seconds before an in-flight request is abandoned.
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.into(),
            api_base: DEFAULT_API_BASE.into(),
            temperature: 0.4,
            max_output_tokens: 500,
            timeout_secs: 60,
        }
    }
}

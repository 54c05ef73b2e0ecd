//! Configuration schema types for Masak.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod chat;
mod logging;
mod model;
mod persona;

pub use chat::*;
pub use logging::*;
pub use model::*;
pub use persona::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Masak.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MasakConfig {
    pub model: ModelConfig,
    pub persona: PersonaConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}

//! Seed-pair persona configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_INSTRUCTION: &str = "Saya adalah ahli masak. Saya akan memberikan berbagai macam jenis resep masakan yang anda inginkan. Jawaban singkat dan jelas. Tolak pertanyaan selain masakan.";
pub const DEFAULT_ACKNOWLEDGMENT: &str =
    "Tentu! Saya akan berikan resep yang Anda inginkan. Silakan tanyakan.";

/// The fixed instruction/acknowledgment pair that opens every session.
///
/// Both turns are replayed to the model on every request and never shown
/// in the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    pub instruction: String,
    pub acknowledgment: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            instruction: DEFAULT_INSTRUCTION.into(),
            acknowledgment: DEFAULT_ACKNOWLEDGMENT.into(),
        }
    }
}

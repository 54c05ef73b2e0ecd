//! Chat surface text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub title: String,
    pub intro: String,
    pub input_prompt: String,
    /// Shown while a request is in flight.
    pub busy_message: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            title: "🍳 Chatbot Ahli Masak".into(),
            intro: "Tanya saya resep masakan apa pun, dan saya akan berikan. \
                    Jika pertanyaan Anda bukan tentang masakan, saya tidak akan menjawab."
                .into(),
            input_prompt: "Tulis nama resep masakan di sini...".into(),
            busy_message: "Sedang mencari resep...".into(),
        }
    }
}

//! Conversation engine for Masak.
//!
//! Provides:
//! - The Turn data model and the append-only per-session history
//! - A `ModelClient` trait with a Gemini implementation
//! - The conversation controller that drives one prompt/reply cycle
//! - Transcript rendering that hides the persona seed turns

pub mod controller;
pub mod gemini;
pub mod history;
pub mod transcript;
pub mod turn;

use std::time::Duration;

use async_trait::async_trait;

pub use controller::{ControllerState, ConversationController, Outcome, SubmitError};
pub use gemini::{GeminiClient, GeminiConfig};
pub use history::{HistoryError, SessionHistory};
pub use transcript::{failure_message, Transcript, TranscriptEntry};
pub use turn::{Role, SeedPair, Turn, TurnKind};

/// Adapter to a remote text-generation provider.
///
/// Implementations must replay `history` in order, followed by `prompt`
/// as a user message. One attempt per call; retries are the caller's
/// business.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(
        &self,
        history: &[Turn],
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<Reply, GenerationError>;

    /// Model identifier, for logs.
    fn model_name(&self) -> &str;
}

/// Per-request generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    /// Sampling randomness, usually in `[0, 1]`.
    pub temperature: f64,
    /// Hard cap on reply length.
    pub max_output_tokens: u32,
    /// How long to wait before abandoning the call.
    pub timeout: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.4,
            max_output_tokens: 500,
            timeout: Duration::from_secs(60),
        }
    }
}

impl GenerationOptions {
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API key rejected: {0}")]
    Unauthorized(String),
    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("model returned no text{}", reason_suffix(.reason))]
    EmptyResponse { reason: Option<String> },
}

impl GenerationError {
    /// The call went through but produced nothing to show.
    pub fn is_empty_response(&self) -> bool {
        matches!(self, Self::EmptyResponse { .. })
    }

    /// Short category name for structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Unauthorized(_) => "unauthorized",
            Self::QuotaExceeded(_) => "quota",
            Self::Timeout(_) => "timeout",
            Self::Api { .. } => "api",
            Self::Parse(_) => "parse",
            Self::EmptyResponse { .. } => "empty",
        }
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_deref()
        .map(|r| format!(" ({r})"))
        .unwrap_or_default()
}

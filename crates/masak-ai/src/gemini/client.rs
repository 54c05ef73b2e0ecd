//! Gemini API client struct, request building, and response parsing.

use std::time::Duration;

use crate::{GenerationError, GenerationOptions, Reply, TokenUsage, Turn};

use super::config::GeminiConfig;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GenerationError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| GenerationError::Network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Build the JSON request body: every history turn in order, then the
    /// new prompt as the final user turn.
    pub(crate) fn build_request_body(
        &self,
        history: &[Turn],
        prompt: &str,
        options: &GenerationOptions,
    ) -> serde_json::Value {
        let mut contents: Vec<serde_json::Value> = history
            .iter()
            .map(|turn| {
                serde_json::json!({
                    "role": turn.role.as_str(),
                    "parts": [{ "text": turn.content }]
                })
            })
            .collect();

        contents.push(serde_json::json!({
            "role": "user",
            "parts": [{ "text": prompt }]
        }));

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "temperature": options.temperature,
                "maxOutputTokens": options.max_output_tokens,
            }
        })
    }

    /// Parse a Gemini response. A response without any text is an
    /// `EmptyResponse`, carrying the block or finish reason when present.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Reply, GenerationError> {
        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
            return Err(GenerationError::EmptyResponse {
                reason: Some(format!("prompt blocked: {reason}")),
            });
        }

        let first = match json["candidates"].as_array().and_then(|c| c.first()) {
            Some(first) => first,
            None => return Err(GenerationError::EmptyResponse { reason: None }),
        };

        let text: String = first["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = first["finishReason"].as_str().map(str::to_string);
            return Err(GenerationError::EmptyResponse { reason });
        }

        Ok(Reply { text, usage })
    }
}

/// Map a non-success HTTP status and body to a categorized error.
pub(crate) fn classify_status(status: reqwest::StatusCode, body: &str) -> GenerationError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string());

    match status.as_u16() {
        401 | 403 => GenerationError::Unauthorized(message),
        400 if body.contains("API_KEY_INVALID") => GenerationError::Unauthorized(message),
        429 => GenerationError::QuotaExceeded(message),
        code => GenerationError::Api {
            status: code,
            message,
        },
    }
}

/// Map a transport failure, keeping timeouts distinct.
pub(crate) fn classify_transport(err: reqwest::Error, timeout: Duration) -> GenerationError {
    if err.is_timeout() {
        GenerationError::Timeout(timeout)
    } else {
        GenerationError::Network(err.to_string())
    }
}

//! ModelClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{GenerationError, GenerationOptions, ModelClient, Reply, Turn};

use super::client::{classify_status, classify_transport, GeminiClient};

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(
        &self,
        history: &[Turn],
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<Reply, GenerationError> {
        let body = self.build_request_body(history, prompt, options);
        let url = self.api_url();

        debug!(
            model = %self.config.model,
            turns = history.len() + 1,
            "Gemini API request"
        );

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .timeout(options.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| classify_transport(e, options.timeout))?;

        let status = response.status();
        if !status.is_success() {
            let text = match response.text().await {
                Ok(text) => text,
                Err(e) if e.is_timeout() => return Err(GenerationError::Timeout(options.timeout)),
                Err(_) => String::new(),
            };
            return Err(classify_status(status, &text));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Timeout(options.timeout)
            } else {
                GenerationError::Parse(e.to_string())
            }
        })?;

        let reply = self.parse_response(json)?;
        debug!(
            input_tokens = reply.usage.input_tokens,
            output_tokens = reply.usage.output_tokens,
            "Gemini API response"
        );
        Ok(reply)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

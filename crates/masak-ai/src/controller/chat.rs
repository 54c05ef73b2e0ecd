//! The prompt/reply cycle.

use tracing::{info, warn};

use crate::transcript::failure_message;
use crate::turn::Turn;
use crate::{GenerationError, Reply};

use super::manager::ConversationController;
use super::types::{BusyGuard, Outcome, SubmitError};

impl ConversationController {
    /// Submit a user prompt and wait for the model.
    ///
    /// Appends the prompt as a user turn, sends the prior history plus the
    /// prompt to the client, and appends the reply as a model turn. A
    /// failed or empty generation appends nothing more and leaves an inline
    /// notice; the session stays usable. Blank prompts and prompts sent
    /// while another is in flight are rejected without touching history.
    pub async fn submit(&self, prompt: &str) -> Result<Outcome, SubmitError> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(SubmitError::EmptyPrompt);
        }

        let _guard = BusyGuard::acquire(&self.busy)?;

        let context = {
            let mut session = self.write();
            session.notice = None;
            let context = session.history.all().to_vec();
            session
                .history
                .append(Turn::user(prompt))
                .map_err(|_| SubmitError::EmptyPrompt)?;
            context
        };

        let result = self.generate(&context, prompt).await;

        let mut session = self.write();
        let result = result.and_then(|reply| {
            session
                .history
                .append(Turn::model(reply.text.clone()))
                .map(|()| reply)
                .map_err(|_| GenerationError::EmptyResponse { reason: None })
        });

        match result {
            Ok(reply) => {
                info!(
                    session = %self.id.short(),
                    output_tokens = reply.usage.output_tokens,
                    "reply received"
                );
                Ok(Outcome::Replied(reply.text))
            }
            Err(err) => {
                warn!(session = %self.id.short(), kind = err.kind(), "generation failed: {err}");
                session.notice = Some(failure_message(&err));
                Ok(Outcome::Failed(err))
            }
        }
    }

    /// One bounded attempt. Blank replies count as empty responses.
    async fn generate(&self, context: &[Turn], prompt: &str) -> Result<Reply, GenerationError> {
        let call = self.client.generate(context, prompt, &self.options);
        let reply = match tokio::time::timeout(self.options.timeout, call).await {
            Ok(result) => result?,
            Err(_) => return Err(GenerationError::Timeout(self.options.timeout)),
        };

        if reply.text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse { reason: None });
        }
        Ok(reply)
    }
}

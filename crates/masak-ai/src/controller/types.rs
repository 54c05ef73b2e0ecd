//! Controller types and the in-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::GenerationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Waiting for user input.
    Idle,
    /// A model request is in flight; new prompts are rejected.
    Generating,
}

/// Result of one accepted prompt. Either way the caller should redraw.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The reply was appended as a model turn.
    Replied(String),
    /// Nothing was appended after the user turn; an inline notice is pending.
    Failed(GenerationError),
}

impl Outcome {
    pub fn is_replied(&self) -> bool {
        matches!(self, Outcome::Replied(_))
    }
}

/// A prompt that was not accepted at all. History is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("session is busy with another request")]
    Busy,
}

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy lock. Returns `Err` if already busy.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, SubmitError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(SubmitError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

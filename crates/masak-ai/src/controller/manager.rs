//! Controller struct and session state accessors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use masak_common::SessionId;
use tracing::info;

use crate::history::SessionHistory;
use crate::transcript::Transcript;
use crate::turn::SeedPair;
use crate::{GenerationOptions, ModelClient};

use super::types::ControllerState;

/// Mutable per-session data. Never shared between sessions.
pub(super) struct SessionState {
    pub(super) history: SessionHistory,
    /// Inline error shown after a failed generation, until the next prompt.
    pub(super) notice: Option<String>,
}

/// Drives one chat session against a model client.
pub struct ConversationController {
    pub(super) id: SessionId,
    pub(super) client: Arc<dyn ModelClient>,
    pub(super) options: GenerationOptions,
    pub(super) session: RwLock<SessionState>,
    /// Whether a request is currently in flight.
    pub(super) busy: AtomicBool,
}

impl ConversationController {
    /// Start a new session whose history holds only the seed pair.
    pub fn new(client: Arc<dyn ModelClient>, seed: SeedPair, options: GenerationOptions) -> Self {
        let id = SessionId::new();
        info!(session = %id.short(), model = %client.model_name(), "session started");
        Self {
            id,
            client,
            options,
            session: RwLock::new(SessionState {
                history: SessionHistory::new(&seed),
                notice: None,
            }),
            busy: AtomicBool::new(false),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.id
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn state(&self) -> ControllerState {
        if self.busy.load(Ordering::Acquire) {
            ControllerState::Generating
        } else {
            ControllerState::Idle
        }
    }

    /// Snapshot of the full history, seed pair included.
    pub fn history(&self) -> SessionHistory {
        self.read().history.clone()
    }

    /// The pending inline error, if the last generation failed.
    pub fn notice(&self) -> Option<String> {
        self.read().notice.clone()
    }

    /// What the user should currently see.
    pub fn transcript(&self) -> Transcript {
        let session = self.read();
        Transcript::from_history(&session.history, session.notice.as_deref())
    }

    pub(super) fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.session.read().unwrap_or_else(|e| e.into_inner())
    }

    pub(super) fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.session.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for ConversationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationController")
            .field("id", &self.id)
            .field("model", &self.client.model_name())
            .field("options", &self.options)
            .field("state", &self.state())
            .field("turns", &self.read().history.len())
            .finish()
    }
}

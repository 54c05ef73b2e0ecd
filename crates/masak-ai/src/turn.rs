//! Role-tagged message units.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "assistant")]
    Model,
}

impl Role {
    /// Role name on the Gemini wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// Whether a turn belongs to the persona seed or to the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    Seed,
    Conversation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub kind: TurnKind,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            kind: TurnKind::Conversation,
        }
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            content: content.into(),
            kind: TurnKind::Conversation,
        }
    }

    pub fn seed(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            kind: TurnKind::Seed,
        }
    }

    pub fn is_seed(&self) -> bool {
        self.kind == TurnKind::Seed
    }

    /// Seed turns are sent to the model but never rendered.
    pub fn is_visible(&self) -> bool {
        !self.is_seed()
    }
}

/// Persona instruction (user role) and its acknowledgment (model role).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPair {
    pub instruction: String,
    pub acknowledgment: String,
}

impl SeedPair {
    pub fn new(instruction: impl Into<String>, acknowledgment: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            acknowledgment: acknowledgment.into(),
        }
    }

    pub fn turns(&self) -> [Turn; 2] {
        [
            Turn::seed(Role::User, self.instruction.clone()),
            Turn::seed(Role::Model, self.acknowledgment.clone()),
        ]
    }
}

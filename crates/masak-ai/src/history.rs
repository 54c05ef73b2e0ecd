//! Append-only turn history for one session.

use crate::turn::{SeedPair, Turn};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("turn content is empty")]
    EmptyContent,
    #[error("seed turns can only be added when the session starts")]
    SeedAfterStart,
}

/// Ordered turns of one session. Always starts with the seed pair;
/// turns are only ever appended.
#[derive(Debug, Clone)]
pub struct SessionHistory {
    turns: Vec<Turn>,
}

impl SessionHistory {
    pub fn new(seed: &SeedPair) -> Self {
        Self {
            turns: seed.turns().into(),
        }
    }

    pub fn append(&mut self, turn: Turn) -> Result<(), HistoryError> {
        if turn.is_seed() {
            return Err(HistoryError::SeedAfterStart);
        }
        if turn.content.trim().is_empty() {
            return Err(HistoryError::EmptyContent);
        }
        self.turns.push(turn);
        Ok(())
    }

    /// Every turn, seed pair included, in conversational order.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    /// Turns that belong in the rendered transcript.
    pub fn visible(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().filter(|t| t.is_visible())
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Always false: the seed pair is never removed.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of turns after the seed pair.
    pub fn conversation_len(&self) -> usize {
        self.visible().count()
    }
}

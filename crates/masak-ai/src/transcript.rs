//! User-visible rendering of a session.
//!
//! The transcript is rebuilt from history on every redraw, so rendering
//! the same history twice yields the same text.

use std::fmt;

use crate::history::SessionHistory;
use crate::turn::Role;
use crate::GenerationError;

const EMPTY_RESPONSE_MESSAGE: &str = "Maaf, terjadi kesalahan atau tidak ada respons.";
const FAILURE_PREFIX: &str = "Maaf, terjadi kesalahan saat berkomunikasi dengan Gemini";
const FAILURE_HINT: &str = "Kemungkinan: masalah koneksi, API key tidak valid, atau melebihi kuota.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEntry {
    Message { role: Role, content: String },
    /// Inline error from the last failed generation.
    Notice(String),
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptEntry::Message {
                role: Role::User,
                content,
            } => write!(f, "🧑 {content}"),
            TranscriptEntry::Message {
                role: Role::Model,
                content,
            } => write!(f, "🍳 {content}"),
            TranscriptEntry::Notice(message) => write!(f, "⚠ {message}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Visible turns in order (seed pair excluded), then the notice if any.
    pub fn from_history(history: &SessionHistory, notice: Option<&str>) -> Self {
        let mut entries: Vec<TranscriptEntry> = history
            .visible()
            .map(|turn| TranscriptEntry::Message {
                role: turn.role,
                content: turn.content.clone(),
            })
            .collect();

        if let Some(notice) = notice {
            entries.push(TranscriptEntry::Notice(notice.to_string()));
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    /// Number of message entries, notices excluded.
    pub fn message_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, TranscriptEntry::Message { .. }))
            .count()
    }

    /// Entries after the first `shown` messages, for incremental redraws.
    pub fn since(&self, shown: usize) -> &[TranscriptEntry] {
        self.entries.get(shown..).unwrap_or(&[])
    }

    pub fn render_plain(&self) -> String {
        self.entries
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// User-facing text for a failed generation.
pub fn failure_message(err: &GenerationError) -> String {
    if err.is_empty_response() {
        EMPTY_RESPONSE_MESSAGE.to_string()
    } else {
        format!("{FAILURE_PREFIX}: {err}\n{FAILURE_HINT}")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::turn::{SeedPair, Turn};

    fn history_with(turns: &[Turn]) -> SessionHistory {
        let mut history = SessionHistory::new(&SeedPair::new("Saya adalah ahli masak.", "Tentu!"));
        for turn in turns {
            history.append(turn.clone()).unwrap();
        }
        history
    }

    #[test]
    fn seed_pair_is_never_rendered() {
        let transcript = Transcript::from_history(&history_with(&[]), None);
        assert!(transcript.entries().is_empty());
        assert_eq!(transcript.render_plain(), "");
    }

    #[test]
    fn renders_turns_in_order() {
        let history = history_with(&[Turn::user("resep soto"), Turn::model("Bahan soto...")]);
        let transcript = Transcript::from_history(&history, None);
        assert_eq!(transcript.render_plain(), "🧑 resep soto\n\n🍳 Bahan soto...");
        assert_eq!(transcript.message_count(), 2);
    }

    #[test]
    fn notice_comes_last() {
        let history = history_with(&[Turn::user("resep soto")]);
        let transcript = Transcript::from_history(&history, Some("gagal"));
        assert_eq!(transcript.entries().len(), 2);
        assert_eq!(
            transcript.entries().last(),
            Some(&TranscriptEntry::Notice("gagal".into()))
        );
        assert_eq!(transcript.message_count(), 1);
    }

    #[test]
    fn since_returns_new_entries() {
        let history = history_with(&[Turn::user("a"), Turn::model("b")]);
        let transcript = Transcript::from_history(&history, None);
        assert_eq!(transcript.since(1).len(), 1);
        assert!(transcript.since(5).is_empty());
    }

    #[test]
    fn failure_message_for_empty_response() {
        let msg = failure_message(&GenerationError::EmptyResponse { reason: None });
        assert_eq!(msg, EMPTY_RESPONSE_MESSAGE);
    }

    #[test]
    fn failure_message_includes_error_and_hint() {
        let msg = failure_message(&GenerationError::Timeout(Duration::from_secs(60)));
        assert!(msg.starts_with(FAILURE_PREFIX));
        assert!(msg.contains("timed out after 60s"));
        assert!(msg.ends_with(FAILURE_HINT));
    }
}

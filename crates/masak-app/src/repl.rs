//! Terminal chat surface.
//!
//! Reads one prompt at a time and only reads the next one after the
//! controller is idle again.

use masak_ai::{ConversationController, Role, SubmitError, Transcript, TranscriptEntry};
use masak_common::MasakError;
use masak_config::schema::ChatConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::debug;

const PROMPT: &str = "› ";

pub async fn run(controller: &ConversationController, chat: &ChatConfig) -> Result<(), MasakError> {
    let mut rl = DefaultEditor::new().map_err(|e| MasakError::Terminal(e.to_string()))?;

    println!("{}", chat.title);
    println!("{}", chat.intro);
    println!("---");
    println!("({})", chat.input_prompt);

    let mut shown = controller.transcript().message_count();

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());

                println!("{}", chat.busy_message);
                match controller.submit(&line).await {
                    Ok(_) => {
                        let transcript = controller.transcript();
                        let update = render_update(&transcript, shown);
                        if !update.is_empty() {
                            println!("{update}\n");
                        }
                        shown = transcript.message_count();
                    }
                    Err(SubmitError::EmptyPrompt) => continue,
                    Err(e @ SubmitError::Busy) => debug!("prompt rejected: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(MasakError::Terminal(err.to_string())),
        }
    }

    Ok(())
}

/// Entries added since the last redraw, minus the user's own prompt
/// which is already on screen.
pub fn render_update(transcript: &Transcript, shown: usize) -> String {
    transcript
        .since(shown)
        .iter()
        .filter(|entry| {
            !matches!(
                entry,
                TranscriptEntry::Message {
                    role: Role::User,
                    ..
                }
            )
        })
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use masak_ai::{SeedPair, SessionHistory, Turn};

    fn history() -> SessionHistory {
        let mut history = SessionHistory::new(&SeedPair::new("Saya adalah ahli masak.", "Tentu!"));
        history.append(Turn::user("resep soto")).unwrap();
        history.append(Turn::model("Bahan soto...")).unwrap();
        history.append(Turn::user("resep nasi goreng")).unwrap();
        history
    }

    #[test]
    fn update_shows_reply_not_prompt() {
        let mut history = history();
        history.append(Turn::model("Berikut resep nasi goreng...")).unwrap();
        let transcript = Transcript::from_history(&history, None);

        assert_eq!(render_update(&transcript, 2), "🍳 Berikut resep nasi goreng...");
    }

    #[test]
    fn update_shows_notice_after_failure() {
        let transcript = Transcript::from_history(&history(), Some("Maaf, terjadi kesalahan."));
        assert_eq!(render_update(&transcript, 2), "⚠ Maaf, terjadi kesalahan.");
    }

    #[test]
    fn nothing_new_renders_empty() {
        let transcript = Transcript::from_history(&history(), None);
        assert_eq!(render_update(&transcript, transcript.message_count()), "");
    }
}

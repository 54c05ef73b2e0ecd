//! Persona and chat text validation.

use crate::schema::MasakConfig;

use super::helpers::validate_not_blank;

pub(super) fn validate_persona(errors: &mut Vec<String>, config: &MasakConfig) {
    validate_not_blank(errors, "persona.instruction", &config.persona.instruction);
    validate_not_blank(
        errors,
        "persona.acknowledgment",
        &config.persona.acknowledgment,
    );
}

pub(super) fn validate_chat(errors: &mut Vec<String>, config: &MasakConfig) {
    validate_not_blank(errors, "chat.input_prompt", &config.chat.input_prompt);
}

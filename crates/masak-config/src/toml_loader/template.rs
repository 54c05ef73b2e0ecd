//! Default TOML config template with inline documentation comments.

use crate::schema::CONFIG_SCHEMA_VERSION;

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    format!(
        "# Masak Configuration\n# Schema version {CONFIG_SCHEMA_VERSION}\n{TEMPLATE_BODY}"
    )
}

const TEMPLATE_BODY: &str = r##"# Only override what you want to change -- missing fields use defaults.
#
# The Gemini API key is NOT stored here. Set GEMINI_API_KEY in the
# environment or put `GEMINI_API_KEY = "..."` in secrets.toml next to
# this file.

[model]
# name = "gemini-1.5-flash"
# api_base = "https://generativelanguage.googleapis.com/v1beta/models"
# temperature = 0.4        # 0.0-2.0
# max_output_tokens = 500  # 1-8192
# timeout_secs = 60        # 1-600

[persona]
# instruction = "Saya adalah ahli masak. ..."
# acknowledgment = "Tentu! Saya akan berikan resep yang Anda inginkan. Silakan tanyakan."

[chat]
# title = "🍳 Chatbot Ahli Masak"
# input_prompt = "Tulis nama resep masakan di sini..."
# busy_message = "Sedang mencari resep..."

[logging]
# level = "info"
"##;

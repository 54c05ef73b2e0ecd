//! Startup checks: config, overrides, credential, session construction.
//!
//! Nothing here reads user input. A chat session only exists once the
//! config validates and the API key resolves.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use masak_ai::{ConversationController, GeminiClient, GeminiConfig, GenerationOptions, SeedPair};
use masak_common::{ConfigError, MasakError};
use masak_config::secrets::{default_secrets_path, resolve_api_key_from, API_KEY_VAR};
use masak_config::{toml_loader, validation, ApiKey, MasakConfig};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Directive;

use crate::cli::Args;

/// Load the config file (creating the default one if missing), apply
/// command-line overrides, and validate the result.
pub fn load_config(args: &Args) -> Result<MasakConfig, ConfigError> {
    let mut config = match &args.config {
        Some(path) => toml_loader::load_from_path(Path::new(path))?,
        None => toml_loader::load_default()?,
    };
    apply_overrides(&mut config, args);
    validation::validate(&config)?;
    Ok(config)
}

fn apply_overrides(config: &mut MasakConfig, args: &Args) {
    if let Some(model) = &args.model {
        config.model.name = model.clone();
    }
    if let Some(temperature) = args.temperature {
        config.model.temperature = temperature;
    }
    if let Some(max) = args.max_output_tokens {
        config.model.max_output_tokens = max;
    }
    if let Some(timeout) = args.timeout {
        config.model.timeout_secs = timeout;
    }
}

/// Effective log filter: `--log-level`, else `[logging] level`. A bare word
/// must be a level name; `target=level` forms go through `Directive`.
pub fn log_directive(args: &Args, config: &MasakConfig) -> Result<Directive, ConfigError> {
    let raw = args
        .log_level
        .as_deref()
        .unwrap_or(&config.logging.level)
        .trim();
    let parsed = if raw.is_empty() {
        None
    } else if raw.contains('=') {
        raw.parse::<Directive>().ok()
    } else {
        raw.parse::<LevelFilter>().ok().map(Directive::from)
    };
    parsed.ok_or_else(|| {
        ConfigError::ValidationError(format!("logging.level: invalid log directive '{raw}'"))
    })
}

/// `--secrets`, else `secrets.toml` beside `--config`, else the platform default.
pub fn secrets_path(args: &Args) -> Result<PathBuf, ConfigError> {
    if let Some(path) = &args.secrets {
        return Ok(PathBuf::from(path));
    }
    if let Some(parent) = args.config.as_deref().and_then(|c| Path::new(c).parent()) {
        return Ok(parent.join("secrets.toml"));
    }
    default_secrets_path()
}

pub fn seed_pair(config: &MasakConfig) -> SeedPair {
    SeedPair::new(
        config.persona.instruction.clone(),
        config.persona.acknowledgment.clone(),
    )
}

pub fn generation_options(config: &MasakConfig) -> GenerationOptions {
    GenerationOptions::default()
        .with_temperature(config.model.temperature)
        .with_max_output_tokens(config.model.max_output_tokens)
        .with_timeout(Duration::from_secs(config.model.timeout_secs))
}

/// Resolve the credential and open a session. `env_key` is the value of
/// `GEMINI_API_KEY` in the environment, if set.
pub fn start_session(
    args: &Args,
    config: &MasakConfig,
    env_key: Option<String>,
) -> Result<ConversationController, MasakError> {
    let api_key = resolve_api_key_from(env_key, &secrets_path(args)?)?;
    let client = build_client(config, &api_key)?;
    info!(model = %config.model.name, "credential resolved");
    Ok(ConversationController::new(
        Arc::new(client),
        seed_pair(config),
        generation_options(config),
    ))
}

fn build_client(config: &MasakConfig, api_key: &ApiKey) -> Result<GeminiClient, MasakError> {
    let gemini = GeminiConfig::new(api_key.expose())
        .with_model(config.model.name.clone())
        .with_api_base(config.model.api_base.clone());
    GeminiClient::new(gemini).map_err(|e| MasakError::Ai(e.to_string()))
}

/// User-visible text for an error that stops the program.
pub fn fatal_message(err: &MasakError) -> String {
    match err {
        MasakError::Config(ConfigError::MissingSecret(_)) => format!(
            "API Key Gemini tidak ditemukan! Silakan tambahkan '{API_KEY_VAR}' \
             ke environment atau secrets.toml."
        ),
        MasakError::Config(e) if e.is_secret_error() => format!("Kesalahan konfigurasi API: {e}"),
        other => format!("Kesalahan konfigurasi: {other}"),
    }
}

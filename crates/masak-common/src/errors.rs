use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing secret: {0}")]
    MissingSecret(String),

    #[error("invalid secret: {0}")]
    InvalidSecret(String),
}

impl ConfigError {
    /// Whether this error concerns the API credential rather than the config file.
    pub fn is_secret_error(&self) -> bool {
        matches!(self, Self::MissingSecret(_) | Self::InvalidSecret(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MasakError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("terminal error: {0}")]
    Terminal(String),
}

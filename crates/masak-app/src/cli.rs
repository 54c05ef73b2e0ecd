use clap::Parser;

/// Masak: a cooking-expert chat assistant backed by Gemini.
#[derive(Parser, Debug, Default)]
#[command(name = "masak", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// secrets.toml path override (holds GEMINI_API_KEY).
    #[arg(long)]
    pub secrets: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Gemini model name.
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature.
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Maximum reply length in tokens.
    #[arg(long)]
    pub max_output_tokens: Option<u32>,

    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the effective config as JSON and exit without starting a session.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

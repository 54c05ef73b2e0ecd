mod cli;
mod dotenv;
mod repl;
mod startup;

use std::path::Path;
use std::process::ExitCode;

use masak_config::secrets::API_KEY_VAR;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

/// Log to stderr so the transcript on stdout stays clean.
fn init_logging(directive: Directive) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything reads the environment
    if let Err(e) = dotenv::load(Path::new(".env")) {
        eprintln!("ignoring .env: {e}");
    }

    let args = cli::parse();

    let config = match startup::load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", startup::fatal_message(&e.into()));
            return ExitCode::FAILURE;
        }
    };

    if args.print_config {
        println!("{}", masak_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let directive = match startup::log_directive(&args, &config) {
        Ok(directive) => directive,
        Err(e) => {
            eprintln!("{}", startup::fatal_message(&e.into()));
            return ExitCode::FAILURE;
        }
    };
    init_logging(directive);
    tracing::info!("Masak v{} starting...", env!("CARGO_PKG_VERSION"));

    let controller =
        match startup::start_session(&args, &config, std::env::var(API_KEY_VAR).ok()) {
            Ok(controller) => controller,
            Err(e) => {
                tracing::error!("startup failed: {e}");
                eprintln!("{}", startup::fatal_message(&e));
                return ExitCode::FAILURE;
            }
        };

    if let Err(e) = repl::run(&controller, &config.chat).await {
        tracing::error!("chat loop error: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

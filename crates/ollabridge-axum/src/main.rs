//! `ollabridge` binary: HTTP bridge in front of an Ollama runtime.

use std::process::ExitCode;

use clap::Parser;
use ollabridge_axum::{ServerConfig, run};
use tracing::error;

/// Install the global subscriber.
///
/// Log level is controlled by the `RUST_LOG` environment variable
/// (default: `info,tower_http=info`).
fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .try_init()
        .ok();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before clap reads the environment
    dotenvy::dotenv().ok();
    init_tracing();

    let config = match ServerConfig::try_parse() {
        Ok(config) => config,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

//! OpsConsole — operations console for agents, regions, servers and logs.
//!
//! Main entry point: parses the command line, loads configuration, sets up
//! logging, and runs the selected command.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use opsconsole_cli::Cli;
use opsconsole_core::config::ConsoleConfig;
use opsconsole_core::error::AppError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = cli.execute(config).await {
        tracing::debug!(kind = %e.kind(), "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration(cli: &Cli) -> Result<ConsoleConfig, AppError> {
    let config_path = cli.config_path();
    ConsoleConfig::load(&config_path)
}

/// Initialize tracing/logging
fn init_logging(config: &ConsoleConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "OpsConsole starting");
}

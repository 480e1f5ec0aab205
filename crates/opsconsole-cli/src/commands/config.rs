//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use opsconsole_core::config::ConsoleConfig;
use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration file
    Validate,
    /// Generate a default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

/// Execute config commands
pub async fn execute(
    args: &ConfigArgs,
    config_path: &str,
    config: ConsoleConfig,
    format: OutputFormat,
) -> AppResult<()> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(&config, format);
        }
        ConfigCommand::Validate => match ConsoleConfig::load(config_path) {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv("Backend", &config.api.base_url);
                output::print_kv(
                    "Idle timeout",
                    &format!("{} min", config.session.idle_timeout_minutes),
                );
                output::print_kv("State file", &config.storage.state_file);
                output::print_kv("Downloads", &config.storage.download_dir);
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            let default_config = include_str!("../../../../config/default.toml");

            if let Some(parent) = std::path::Path::new(out_path).parent() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| AppError::Storage {
                    message: format!("Failed to create dir: {}", parent.display()),
                    source: Some(e),
                })?;
            }

            tokio::fs::write(out_path, default_config)
                .await
                .map_err(|e| AppError::Storage {
                    message: format!("Failed to write config: {out_path}"),
                    source: Some(e),
                })?;

            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}

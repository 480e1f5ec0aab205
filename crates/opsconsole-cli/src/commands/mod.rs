//! CLI command definitions and dispatch.

pub mod actuator;
pub mod agents;
pub mod auth;
pub mod config;
pub mod layout;
pub mod logs;
pub mod regions;
pub mod roles;
pub mod route;
pub mod servers;
pub mod services;
pub mod users;

use clap::{Parser, Subcommand};

use opsconsole_core::config::ConsoleConfig;
use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;
use opsconsole_core::types::Record;

use crate::context::ConsoleContext;
use crate::output::OutputFormat;

/// OpsConsole: operations console for agents, regions, servers and logs
#[derive(Debug, Parser)]
#[command(name = "opsconsole", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults to $OPSCONSOLE_CONFIG or config/default.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in, sign out and inspect the session
    Auth(auth::AuthArgs),
    /// User management
    Users(users::UsersArgs),
    /// Log-collection agents
    Agents(agents::AgentsArgs),
    /// Regions
    Regions(regions::RegionsArgs),
    /// Database servers
    Servers(servers::ServersArgs),
    /// Monitored services
    Services(services::ServicesArgs),
    /// Roles
    Roles(roles::RolesArgs),
    /// Browse, search and download agent logs
    Logs(logs::LogsArgs),
    /// Backend health and telemetry
    Actuator(actuator::ActuatorArgs),
    /// Theme and layout preferences
    Layout(layout::LayoutArgs),
    /// Inspect view routing
    Route(route::RouteArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Configuration path: the flag, then `OPSCONSOLE_CONFIG`, then the default.
    pub fn config_path(&self) -> String {
        self.config
            .clone()
            .or_else(|| std::env::var("OPSCONSOLE_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string())
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: ConsoleConfig) -> AppResult<()> {
        let format = self.format;

        if let Commands::Config(args) = &self.command {
            return config::execute(args, &self.config_path(), config, format).await;
        }

        let ctx = ConsoleContext::new(config)?;
        match &self.command {
            Commands::Auth(args) => auth::execute(args, &ctx, format).await,
            Commands::Users(args) => users::execute(args, &ctx, format).await,
            Commands::Agents(args) => agents::execute(args, &ctx, format).await,
            Commands::Regions(args) => regions::execute(args, &ctx, format).await,
            Commands::Servers(args) => servers::execute(args, &ctx, format).await,
            Commands::Services(args) => services::execute(args, &ctx, format).await,
            Commands::Roles(args) => roles::execute(args, &ctx, format).await,
            Commands::Logs(args) => logs::execute(args, &ctx, format).await,
            Commands::Actuator(args) => actuator::execute(args, &ctx, format).await,
            Commands::Layout(args) => layout::execute(args, &ctx, format),
            Commands::Route(args) => route::execute(args, &ctx, format),
            Commands::Config(_) => Ok(()),
        }
    }
}

/// Helper: parse a JSON payload given on the command line
pub fn parse_payload(data: &str) -> AppResult<Record> {
    let payload: Record = serde_json::from_str(data)
        .map_err(|e| AppError::validation(format!("Invalid JSON payload: {e}")))?;
    if !payload.is_object() {
        return Err(AppError::validation("JSON payload must be an object"));
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_requires_object() {
        assert!(parse_payload(r#"{"name":"edge-1"}"#).is_ok());
        assert!(parse_payload("[1,2]").is_err());
        assert!(parse_payload("{oops").is_err());
    }

    #[test]
    fn test_cli_parses_nested_command() {
        let cli = Cli::try_parse_from([
            "opsconsole",
            "--format",
            "json",
            "agents",
            "status",
            "7",
            "inactive",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Agents(_)));
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let cli = Cli::try_parse_from(["opsconsole", "-c", "custom.toml", "auth", "status"]).unwrap();
        assert_eq!(cli.config_path(), "custom.toml");
    }
}

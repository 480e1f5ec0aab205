//! Backend health CLI commands.

use clap::{Args, Subcommand};
use serde_json::json;

use opsconsole_core::result::AppResult;

use crate::context::{ConsoleContext, views};
use crate::output::{self, OutputFormat};

/// Arguments for actuator commands
#[derive(Debug, Args)]
pub struct ActuatorArgs {
    /// Actuator subcommand
    #[command(subcommand)]
    pub command: ActuatorCommand,
}

/// Actuator subcommands
#[derive(Debug, Subcommand)]
pub enum ActuatorCommand {
    /// Backend health
    Health,
    /// Backend process uptime
    Uptime,
    /// Recent request statistics
    Requests,
    /// Audit events
    Audits,
}

/// Execute actuator commands
pub async fn execute(args: &ActuatorArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        ActuatorCommand::Health => {
            ctx.open_view(views::DASHBOARD)?;
            output::print_value(&ctx.actuator.health().await?, format);
        }
        ActuatorCommand::Uptime => {
            ctx.open_view(views::DASHBOARD)?;
            let seconds = ctx.actuator.uptime().await?;
            match format {
                OutputFormat::Json => output::print_value(&json!({ "uptime_seconds": seconds }), format),
                OutputFormat::Table => output::print_kv("Uptime", &format_uptime(seconds)),
            }
        }
        ActuatorCommand::Requests => {
            ctx.open_view(views::DASHBOARD)?;
            output::print_value(&ctx.actuator.requests().await?, format);
        }
        ActuatorCommand::Audits => {
            ctx.open_view(views::AUDIT)?;
            output::print_value(&ctx.actuator.audits().await?, format);
        }
    }

    Ok(())
}

/// `3725.4` → `"1h 2m 5s"`.
fn format_uptime(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let (hours, minutes, secs) = (total / 3600, (total % 3600) / 60, total % 60);
    match (hours, minutes) {
        (0, 0) => format!("{secs}s"),
        (0, _) => format!("{minutes}m {secs}s"),
        _ => format!("{hours}h {minutes}m {secs}s"),
    }
}

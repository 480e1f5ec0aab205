//! Monitored service CLI commands.

use clap::{Args, Subcommand};

use opsconsole_core::result::AppResult;
use opsconsole_core::types::ServiceId;

use crate::context::{ConsoleContext, views};
use crate::output::{self, OutputFormat};

/// Arguments for service commands
#[derive(Debug, Args)]
pub struct ServicesArgs {
    /// Service subcommand
    #[command(subcommand)]
    pub command: ServicesCommand,
}

/// Service subcommands
#[derive(Debug, Subcommand)]
pub enum ServicesCommand {
    /// List all services
    List,
    /// Show one service
    Get {
        /// Service ID
        id: ServiceId,
    },
    /// Create a service
    Create {
        /// Service attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Replace a service's attributes
    Update {
        /// Service ID
        id: ServiceId,
        /// New attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Delete a service
    Delete {
        /// Service ID
        id: ServiceId,
    },
}

/// Execute service commands
pub async fn execute(args: &ServicesArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    ctx.open_view(views::RUNNING)?;

    match &args.command {
        ServicesCommand::List => output::print_records(&ctx.services.list().await?, format),
        ServicesCommand::Get { id } => output::print_value(&ctx.services.get(id).await?, format),
        ServicesCommand::Create { data } => {
            let created = ctx.services.create(super::parse_payload(data)?).await?;
            output::print_success("Service created");
            output::print_value(&created, format);
        }
        ServicesCommand::Update { id, data } => {
            let updated = ctx.services.update(id, super::parse_payload(data)?).await?;
            output::print_success(&format!("Service '{id}' updated"));
            output::print_value(&updated, format);
        }
        ServicesCommand::Delete { id } => {
            ctx.services.delete(id).await?;
            output::print_success(&format!("Service '{id}' deleted"));
        }
    }

    Ok(())
}

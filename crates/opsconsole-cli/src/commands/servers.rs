//! Database server CLI commands.

use clap::{Args, Subcommand};

use opsconsole_core::result::AppResult;
use opsconsole_core::types::{ResourceStatus, ServerId};

use crate::context::{ConsoleContext, views};
use crate::output::{self, OutputFormat};

/// Arguments for server commands
#[derive(Debug, Args)]
pub struct ServersArgs {
    /// Server subcommand
    #[command(subcommand)]
    pub command: ServersCommand,
}

/// Server subcommands
#[derive(Debug, Subcommand)]
pub enum ServersCommand {
    /// List all database servers
    List,
    /// Register a database server
    Create {
        /// Server attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Replace a server's attributes
    Update {
        /// Server ID
        id: ServerId,
        /// New attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Set a server's status
    Status {
        /// Server ID
        id: ServerId,
        /// active | inactive
        status: ResourceStatus,
    },
    /// Delete a server
    Delete {
        /// Server ID
        id: ServerId,
    },
}

/// Execute server commands
pub async fn execute(args: &ServersArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    ctx.open_view(views::SERVERS)?;

    match &args.command {
        ServersCommand::List => {
            output::print_records(&ctx.servers.list().await?, format);
        }
        ServersCommand::Create { data } => {
            let created = ctx.servers.create(super::parse_payload(data)?).await?;
            output::print_success("Server registered");
            output::print_value(&created, format);
        }
        ServersCommand::Update { id, data } => {
            let updated = ctx.servers.update(id, super::parse_payload(data)?).await?;
            output::print_success(&format!("Server '{id}' updated"));
            output::print_value(&updated, format);
        }
        ServersCommand::Status { id, status } => {
            ctx.servers.toggle_status(id, *status).await?;
            output::print_success(&format!("Server '{id}' is now {status}"));
        }
        ServersCommand::Delete { id } => {
            ctx.servers.delete(id).await?;
            output::print_success(&format!("Server '{id}' deleted"));
        }
    }

    Ok(())
}

//! Role CLI commands.

use clap::{Args, Subcommand};

use opsconsole_core::result::AppResult;
use opsconsole_core::types::RoleId;

use crate::context::{ConsoleContext, views};
use crate::output::{self, OutputFormat};

/// Arguments for role commands
#[derive(Debug, Args)]
pub struct RolesArgs {
    /// Role subcommand
    #[command(subcommand)]
    pub command: RolesCommand,
}

/// Role subcommands
#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// List all roles
    List,
    /// Create a role
    Create {
        /// Role attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Replace a role
    Update {
        /// Role ID
        id: RoleId,
        /// New attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Delete a role
    Delete {
        /// Role ID
        id: RoleId,
    },
}

/// Execute role commands
pub async fn execute(args: &RolesArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    ctx.open_view(views::ROLES)?;

    match &args.command {
        RolesCommand::List => output::print_records(&ctx.roles.list().await?, format),
        RolesCommand::Create { data } => {
            let created = ctx.roles.create(super::parse_payload(data)?).await?;
            output::print_success("Role created");
            output::print_value(&created, format);
        }
        RolesCommand::Update { id, data } => {
            ctx.roles.update(id, super::parse_payload(data)?).await?;
            output::print_success(&format!("Role '{id}' updated"));
        }
        RolesCommand::Delete { id } => {
            ctx.roles.delete(id).await?;
            output::print_success(&format!("Role '{id}' deleted"));
        }
    }

    Ok(())
}

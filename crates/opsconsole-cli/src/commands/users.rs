//! User management CLI commands.

use clap::{Args, Subcommand};

use opsconsole_core::result::AppResult;
use opsconsole_core::types::UserId;

use crate::context::{ConsoleContext, views};
use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UsersArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UsersCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List all users
    List,
    /// Replace a user's attributes
    Update {
        /// User ID
        id: UserId,
        /// New attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: UserId,
    },
}

/// Execute user commands
pub async fn execute(args: &UsersArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    ctx.open_view(views::USERS)?;

    match &args.command {
        UsersCommand::List => {
            let users = ctx.session.list_users().await?;
            output::print_records(&users, format);
        }
        UsersCommand::Update { id, data } => {
            let updated = ctx.session.update_user(id, super::parse_payload(data)?).await?;
            output::print_success(&format!("User '{id}' updated"));
            output::print_value(&updated, format);
        }
        UsersCommand::Delete { id } => {
            ctx.session.delete_user(id).await?;
            output::print_success(&format!("User '{id}' deleted"));
        }
    }

    Ok(())
}

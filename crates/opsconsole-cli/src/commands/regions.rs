//! Region CLI commands.

use clap::{Args, Subcommand};

use opsconsole_core::result::AppResult;
use opsconsole_core::types::{RegionId, ResourceStatus};

use crate::context::{ConsoleContext, views};
use crate::output::{self, OutputFormat};

/// Arguments for region commands
#[derive(Debug, Args)]
pub struct RegionsArgs {
    /// Region subcommand
    #[command(subcommand)]
    pub command: RegionsCommand,
}

/// Region subcommands
#[derive(Debug, Subcommand)]
pub enum RegionsCommand {
    /// List all regions
    List,
    /// Create a region
    Create {
        /// Region attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Replace a region's attributes
    Update {
        /// Region ID
        id: RegionId,
        /// New attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Enable or disable a region
    Status {
        /// Region ID
        id: RegionId,
        /// active | inactive
        status: ResourceStatus,
    },
    /// Delete a region
    Delete {
        /// Region ID
        id: RegionId,
    },
}

/// Execute region commands
pub async fn execute(args: &RegionsArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    ctx.open_view(views::REGIONS)?;

    match &args.command {
        RegionsCommand::List => {
            output::print_records(&ctx.regions.list().await?, format);
        }
        RegionsCommand::Create { data } => {
            let created = ctx.regions.create(super::parse_payload(data)?).await?;
            output::print_success("Region created");
            output::print_value(&created, format);
        }
        RegionsCommand::Update { id, data } => {
            let updated = ctx.regions.update(id, super::parse_payload(data)?).await?;
            output::print_success(&format!("Region '{id}' updated"));
            output::print_value(&updated, format);
        }
        RegionsCommand::Status { id, status } => {
            ctx.regions.update_status(id, *status).await?;
            output::print_success(&format!("Region '{id}' is now {status}"));
        }
        RegionsCommand::Delete { id } => {
            ctx.regions.delete(id).await?;
            output::print_success(&format!("Region '{id}' deleted"));
        }
    }

    Ok(())
}

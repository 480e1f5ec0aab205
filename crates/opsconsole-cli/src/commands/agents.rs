//! Agent CLI commands.

use clap::{Args, Subcommand};

use opsconsole_core::result::AppResult;
use opsconsole_core::types::{AgentId, RegionId, ResourceStatus};

use crate::context::{ConsoleContext, views};
use crate::output::{self, OutputFormat};

/// Arguments for agent commands
#[derive(Debug, Args)]
pub struct AgentsArgs {
    /// Agent subcommand
    #[command(subcommand)]
    pub command: AgentsCommand,
}

/// Agent subcommands
#[derive(Debug, Subcommand)]
pub enum AgentsCommand {
    /// List all agents
    List,
    /// Show one agent
    Get {
        /// Agent ID
        id: AgentId,
    },
    /// Register an agent
    Create {
        /// Agent attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Replace an agent's attributes
    Update {
        /// Agent ID
        id: AgentId,
        /// New attributes as a JSON object
        #[arg(short, long)]
        data: String,
    },
    /// Enable or disable an agent
    Status {
        /// Agent ID
        id: AgentId,
        /// active | inactive
        status: ResourceStatus,
    },
    /// List the agents of a region
    ByRegion {
        /// Region ID
        region: RegionId,
    },
    /// Delete an agent
    Delete {
        /// Agent ID
        id: AgentId,
    },
}

/// Execute agent commands
pub async fn execute(args: &AgentsArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    ctx.open_view(views::AGENTS)?;

    match &args.command {
        AgentsCommand::List => {
            let agents = ctx.agents.list().await?;
            output::print_records(&agents, format);
        }
        AgentsCommand::Get { id } => {
            let agent = ctx.agents.get(id).await?;
            output::print_value(&agent, format);
        }
        AgentsCommand::Create { data } => {
            let created = ctx.agents.create(super::parse_payload(data)?).await?;
            output::print_success("Agent registered");
            output::print_value(&created, format);
        }
        AgentsCommand::Update { id, data } => {
            let updated = ctx.agents.update(id, super::parse_payload(data)?).await?;
            output::print_success(&format!("Agent '{id}' updated"));
            output::print_value(&updated, format);
        }
        AgentsCommand::Status { id, status } => {
            ctx.agents.update_status(id, *status).await?;
            output::print_success(&format!("Agent '{id}' is now {status}"));
        }
        AgentsCommand::ByRegion { region } => {
            let agents = ctx.agents.list_by_region(region).await?;
            output::print_records(&agents, format);
        }
        AgentsCommand::Delete { id } => {
            ctx.agents.delete(id).await?;
            output::print_success(&format!("Agent '{id}' deleted"));
        }
    }

    Ok(())
}

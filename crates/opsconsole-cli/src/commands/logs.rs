//! Log CLI commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use opsconsole_core::result::AppResult;
use opsconsole_core::types::{AgentId, RegionId};

use crate::context::{ConsoleContext, views};
use crate::output::{self, OutputFormat};

/// Arguments for log commands
#[derive(Debug, Args)]
pub struct LogsArgs {
    /// Region whose collector serves the request
    #[arg(short, long, global = true)]
    pub region: Option<RegionId>,

    /// Log subcommand
    #[command(subcommand)]
    pub command: LogsCommand,
}

/// Log subcommands
#[derive(Debug, Subcommand)]
pub enum LogsCommand {
    /// List an agent's log files
    List {
        /// Agent ID
        agent: AgentId,
    },
    /// Print one log file
    File {
        /// Agent ID
        agent: AgentId,
        /// Log file name
        filename: String,
    },
    /// Log files for a day (YYYY-MM-DD)
    Filter {
        /// Agent ID
        agent: AgentId,
        /// Day
        date: NaiveDate,
    },
    /// Archived log files for a day (YYYY-MM-DD)
    FilterArchive {
        /// Agent ID
        agent: AgentId,
        /// Day
        date: NaiveDate,
    },
    /// Download log files as one ZIP archive
    Zip {
        /// Agent ID
        agent: AgentId,
        /// Log file names
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Log lines of one transaction on a given day
    Transaction {
        /// Agent ID
        agent: AgentId,
        /// Transaction ID
        transaction_id: String,
        /// Day
        date: NaiveDate,
    },
    /// Search a transaction inside selected log files
    Search {
        /// Agent ID
        agent: AgentId,
        /// Transaction ID
        transaction_id: String,
        /// Log file names
        files: Vec<String>,
    },
}

/// Execute log commands
pub async fn execute(args: &LogsArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    let region = args.region.as_ref();

    match &args.command {
        LogsCommand::List { agent } => {
            ctx.open_view(views::FIND_LOG)?;
            output::print_value(&ctx.logs.list(agent, region).await?, format);
        }
        LogsCommand::File { agent, filename } => {
            ctx.open_view(views::FIND_LOG)?;
            let content = ctx.logs.get_file(agent, filename, region).await?;
            print!("{content}");
        }
        LogsCommand::Filter { agent, date } => {
            ctx.open_view(views::FIND_LOG)?;
            output::print_value(&ctx.logs.filter_by_date(agent, *date, region).await?, format);
        }
        LogsCommand::FilterArchive { agent, date } => {
            ctx.open_view(views::ARCHIVE_LOG)?;
            let files = ctx.logs.filter_archive_by_date(agent, *date, region).await?;
            output::print_value(&files, format);
        }
        LogsCommand::Zip { agent, files } => {
            ctx.open_view(views::ARCHIVE_LOG)?;
            let saved = ctx.logs.zip_files(agent, files.clone(), region).await?;
            match format {
                OutputFormat::Json => output::print_item(&saved, format),
                OutputFormat::Table => {
                    output::print_success("Log archive downloaded");
                    output::print_kv("Path", &saved.path.display().to_string());
                    output::print_kv("Size", &format!("{} bytes", saved.size_bytes));
                }
            }
        }
        LogsCommand::Transaction {
            agent,
            transaction_id,
            date,
        } => {
            ctx.open_view(views::FIND_LOG_TRANSACTION)?;
            let lines = ctx
                .logs
                .by_transaction(agent, transaction_id, *date, region)
                .await?;
            output::print_value(&lines, format);
        }
        LogsCommand::Search {
            agent,
            transaction_id,
            files,
        } => {
            ctx.open_view(views::FIND_LOG_TRANSACTION)?;
            let hits = ctx
                .logs
                .search_selected(agent, transaction_id, files, region)
                .await?;
            output::print_records(&hits, format);
        }
    }

    Ok(())
}

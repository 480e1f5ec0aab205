//! View routing CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use opsconsole_core::result::AppResult;
use opsconsole_shell::router::ROUTES;
use opsconsole_shell::GuardDecision;

use crate::context::ConsoleContext;
use crate::output::{self, OutputFormat};

/// Arguments for route commands
#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Route subcommand
    #[command(subcommand)]
    pub command: RouteCommand,
}

/// Route subcommands
#[derive(Debug, Subcommand)]
pub enum RouteCommand {
    /// List all views
    List,
    /// Run the navigation guard for a path against the stored session
    Check {
        /// View path, e.g. /uikit/Agents
        path: String,
    },
}

/// View display row for table output
#[derive(Debug, Serialize, Tabled)]
struct RouteRow {
    /// Path
    path: &'static str,
    /// Name
    name: &'static str,
    /// Requires a session
    requires_auth: bool,
}

/// Guard outcome for output
#[derive(Debug, Serialize)]
struct CheckResult {
    path: String,
    decision: &'static str,
    redirect: Option<String>,
}

/// Execute route commands
pub fn execute(args: &RouteArgs, ctx: &ConsoleContext, format: OutputFormat) -> AppResult<()> {
    match &args.command {
        RouteCommand::List => {
            let rows: Vec<RouteRow> = ROUTES
                .iter()
                .map(|r| RouteRow {
                    path: r.path,
                    name: r.name,
                    requires_auth: r.requires_auth,
                })
                .collect();
            output::print_list(&rows, format);
        }
        RouteCommand::Check { path } => {
            let result = match ctx.router.check(path)? {
                GuardDecision::Proceed => CheckResult {
                    path: path.clone(),
                    decision: "proceed",
                    redirect: None,
                },
                GuardDecision::Redirect(to) => CheckResult {
                    path: path.clone(),
                    decision: "redirect",
                    redirect: Some(to),
                },
            };
            match format {
                OutputFormat::Json => output::print_item(&result, format),
                OutputFormat::Table => match &result.redirect {
                    None => output::print_success(&format!("{path}: proceed")),
                    Some(to) => output::print_warning(&format!("{path}: redirect to {to}")),
                },
            }
        }
    }

    Ok(())
}

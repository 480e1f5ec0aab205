//! # opsconsole-cli
//!
//! Command-line front end for the operations console. Each invocation builds
//! a [`ConsoleContext`] from the loaded configuration, routes the command
//! through the view guard, and prints the result as a table or JSON.

pub mod commands;
pub mod context;
pub mod output;

pub use commands::Cli;
pub use context::ConsoleContext;
pub use output::OutputFormat;

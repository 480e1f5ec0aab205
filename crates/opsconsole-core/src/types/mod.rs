//! Core type definitions used across the OpsConsole workspace.

pub mod id;
pub mod logs;
pub mod record;
pub mod token;

pub use id::*;
pub use logs::LogSelection;
pub use record::{Record, ResourceStatus};
pub use token::SessionToken;

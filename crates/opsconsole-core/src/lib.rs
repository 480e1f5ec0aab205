//! # opsconsole-core
//!
//! Core crate for OpsConsole. Contains the storage, navigation and download
//! traits implemented by the other crates, configuration schemas, typed
//! identifiers, client storage keys, and the unified error system.
//!
//! This crate has **no** internal dependencies on other OpsConsole crates.

pub mod config;
pub mod error;
pub mod keys;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;

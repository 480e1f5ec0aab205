//! Convenience result type alias for OpsConsole.

use crate::error::AppError;

/// A specialized `Result` type for OpsConsole operations.
pub type AppResult<T> = Result<T, AppError>;

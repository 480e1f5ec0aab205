//! Unified error types for OpsConsole.
//!
//! Every service operation maps transport failures into [`AppError`] so
//! callers see one error type whatever layer produced it. Messages are kept
//! as structured fields; formatting for humans happens in the CLI.

use std::fmt;
use thiserror::Error;

/// Error category used for presentation and exit-code decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The backend could not be reached or the exchange broke off.
    Transport,
    /// The backend rejected the credentials (401/403) or login yielded no token.
    Authentication,
    /// The backend answered with an error status.
    Service,
    /// A local precondition failed before any request was sent.
    Validation,
    /// A binary download did not carry an archive content type.
    InvalidContentType,
    /// A configuration error occurred.
    Configuration,
    /// Client-side storage could not be read or written.
    Storage,
    /// A payload could not be serialized or deserialized.
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport => write!(f, "TRANSPORT"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Service => write!(f, "SERVICE"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::InvalidContentType => write!(f, "INVALID_CONTENT_TYPE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// The unified error used throughout OpsConsole.
#[derive(Debug, Error)]
pub enum AppError {
    /// Network or transport failure with no structured backend body.
    #[error("{message}")]
    Transport {
        /// Human-readable message (the per-operation fallback).
        message: String,
        /// Underlying cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Authentication or authorization failure.
    #[error("{message}")]
    Auth {
        /// HTTP status when the backend produced one.
        status: Option<u16>,
        /// Human-readable message.
        message: String,
    },

    /// The backend answered with an error status.
    #[error("{message}")]
    Service {
        /// HTTP status when the backend produced one.
        status: Option<u16>,
        /// Backend-supplied message, else the per-operation fallback.
        message: String,
    },

    /// Local precondition failure.
    #[error("{0}")]
    Validation(String),

    /// Archive download answered with a non-archive content type.
    #[error("Invalid file type received. Expected ZIP, got {content_type}.")]
    InvalidContentType {
        /// The declared content type, or `unknown` when absent.
        content_type: String,
    },

    /// Configuration could not be loaded or is inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Client storage failure.
    #[error("{message}")]
    Storage {
        /// Human-readable message.
        message: String,
        /// Underlying I/O cause, when one exists.
        #[source]
        source: Option<std::io::Error>,
    },

    /// Payload (de)serialization failure.
    #[error("{message}")]
    Serialization {
        /// Human-readable message.
        message: String,
        /// Underlying JSON cause, when one exists.
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl AppError {
    /// Create a transport error without an underlying cause.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Create an authentication error.
    pub fn auth(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Auth {
            status,
            message: message.into(),
        }
    }

    /// Create a service error.
    pub fn service(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Service {
            status,
            message: message.into(),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an invalid-content-type error.
    pub fn invalid_content_type(content_type: Option<&str>) -> Self {
        Self::InvalidContentType {
            content_type: content_type.unwrap_or("unknown").to_string(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a storage error without an underlying cause.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Create a serialization error without an underlying cause.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
            source: None,
        }
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Auth { .. } => ErrorKind::Authentication,
            Self::Service { .. } => ErrorKind::Service,
            Self::Validation(_) => ErrorKind::Validation,
            Self::InvalidContentType { .. } => ErrorKind::InvalidContentType,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Storage { .. } => ErrorKind::Storage,
            Self::Serialization { .. } => ErrorKind::Serialization,
        }
    }

    /// HTTP status attached to the error, if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Auth { status, .. } | Self::Service { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether the backend rejected the session (401/403).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization error: {err}"),
            source: Some(err),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage {
            message: format!("I/O error: {err}"),
            source: Some(err),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(AppError::validation("x").kind(), ErrorKind::Validation);
        assert_eq!(AppError::auth(Some(401), "x").kind(), ErrorKind::Authentication);
        assert_eq!(AppError::transport("x").kind(), ErrorKind::Transport);
        assert_eq!(
            AppError::invalid_content_type(None).kind(),
            ErrorKind::InvalidContentType
        );
    }

    #[test]
    fn test_message_is_display() {
        let err = AppError::service(Some(500), "Error fetching servers");
        assert_eq!(err.to_string(), "Error fetching servers");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn test_invalid_content_type_message() {
        let err = AppError::invalid_content_type(Some("text/html"));
        assert_eq!(
            err.to_string(),
            "Invalid file type received. Expected ZIP, got text/html."
        );
    }

    #[test]
    fn test_auth_failure_detection() {
        assert!(AppError::auth(Some(403), "Forbidden").is_auth_failure());
        assert!(!AppError::auth(None, "Token not found in response").is_auth_failure());
    }
}

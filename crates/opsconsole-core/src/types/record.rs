//! Opaque backend records and the status values sent to toggle endpoints.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A backend-owned record. The console passes these through unchanged.
pub type Record = serde_json::Value;

/// Enabled/disabled status sent as the `status` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    /// The resource is active.
    Active,
    /// The resource is inactive.
    Inactive,
}

impl ResourceStatus {
    /// Query-string form expected by the backend.
    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Active => "true",
            Self::Inactive => "false",
        }
    }

    /// The opposite status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

impl From<bool> for ResourceStatus {
    fn from(active: bool) -> Self {
        if active { Self::Active } else { Self::Inactive }
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for ResourceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" | "true" | "on" | "1" => Ok(Self::Active),
            "inactive" | "false" | "off" | "0" => Ok(Self::Inactive),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_value() {
        assert_eq!(ResourceStatus::Active.as_query_value(), "true");
        assert_eq!(ResourceStatus::from(false).as_query_value(), "false");
    }

    #[test]
    fn test_parse() {
        assert_eq!("TRUE".parse::<ResourceStatus>(), Ok(ResourceStatus::Active));
        assert_eq!("inactive".parse::<ResourceStatus>(), Ok(ResourceStatus::Inactive));
        assert!("maybe".parse::<ResourceStatus>().is_err());
    }
}

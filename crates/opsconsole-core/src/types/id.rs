//! Newtype wrappers for backend record identifiers.
//!
//! The backend owns id allocation and the console never interprets an id,
//! so each wrapper holds the id as an opaque string. Distinct types keep a
//! `RegionId` from being passed where an `AgentId` is expected.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around an opaque string.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Return the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_string()))
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a log-collection agent.
    AgentId
);

define_id!(
    /// Identifier of a region.
    RegionId
);

define_id!(
    /// Identifier of a database server entry.
    ServerId
);

define_id!(
    /// Identifier of a monitored service.
    ServiceId
);

define_id!(
    /// Identifier of a role.
    RoleId
);

define_id!(
    /// Identifier of a console user.
    UserId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_display() {
        let id = AgentId::from(42_i64);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn test_from_str() {
        let id: RegionId = "eu-west".parse().expect("infallible");
        assert_eq!(id, RegionId::new("eu-west"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ServerId::new("db-7");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"db-7\"");
    }
}

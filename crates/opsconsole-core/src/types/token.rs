//! Session token wrapper.

use std::fmt;

/// Opaque bearer credential proving an authenticated identity.
///
/// `Debug` is redacted so tokens never reach logs through `{:?}`.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token. Returns `None` for blank input.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw token value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_rejected() {
        assert!(SessionToken::parse("   ").is_none());
    }

    #[test]
    fn test_bearer_and_redaction() {
        let token = SessionToken::parse(" abc.def ").expect("token");
        assert_eq!(token.bearer(), "Bearer abc.def");
        assert_eq!(format!("{token:?}"), "SessionToken(***)");
    }
}

//! Read-only view of the session used by navigation guards.

/// Reports whether a session token is currently stored.
pub trait AuthenticationState: Send + Sync + 'static {
    /// `true` when a token is present.
    fn is_authenticated(&self) -> bool;
}

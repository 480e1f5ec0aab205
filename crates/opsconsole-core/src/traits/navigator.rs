//! Navigation side effect used by the transport's auth-failure handling.

/// Moves the application to another view.
pub trait Navigator: Send + Sync + 'static {
    /// Redirect to `path`, replacing the current location.
    fn redirect(&self, path: &str);
}

//! Key/value client storage.

use crate::result::AppResult;

/// Durable string key/value storage, the console's equivalent of browser
/// local storage.
///
/// Implementations use interior mutability; every mutation must be visible
/// to the next read from any holder of the same store.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Read a value. Returns `None` when the key is absent.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> AppResult<()>;

    /// All stored keys, sorted.
    fn keys(&self) -> AppResult<Vec<String>>;

    /// Whether a key is present.
    fn contains(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

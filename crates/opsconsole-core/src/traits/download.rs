//! Destination for downloaded binary payloads.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Where a saved download ended up.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SavedFile {
    /// Final location of the file.
    pub path: PathBuf,
    /// Number of bytes written.
    pub size_bytes: u64,
}

/// Saves a downloaded payload under a file name.
///
/// Implementations stage the payload in a temporary resource, publish it
/// under `filename`, and release the temporary resource whether or not
/// publishing succeeded.
#[async_trait]
pub trait DownloadSink: Send + Sync + std::fmt::Debug + 'static {
    /// Save `payload` as `filename`.
    async fn save(&self, filename: &str, payload: Bytes) -> AppResult<SavedFile>;
}

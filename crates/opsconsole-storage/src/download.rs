//! Directory-backed download sink.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::info;

use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;
use opsconsole_core::traits::download::{DownloadSink, SavedFile};

/// Publishes downloads into a directory.
///
/// The payload is staged in a temporary file inside the target directory
/// and renamed into place. A failed save drops the temporary file, which
/// deletes it.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir` (created on first save).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn validate_filename(filename: &str) -> AppResult<()> {
    let invalid = filename.trim().is_empty()
        || filename.contains('/')
        || filename.contains('\\')
        || filename == "."
        || filename == "..";
    if invalid {
        return Err(AppError::validation(format!(
            "Invalid download file name: '{filename}'"
        )));
    }
    Ok(())
}

fn write_staged(dir: &Path, filename: &str, payload: &[u8]) -> AppResult<SavedFile> {
    std::fs::create_dir_all(dir).map_err(|e| AppError::Storage {
        message: format!("Failed to create download directory: {}", dir.display()),
        source: Some(e),
    })?;

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(payload)?;
    staged.flush()?;

    let target = dir.join(filename);
    staged.persist(&target).map_err(|e| AppError::Storage {
        message: format!("Failed to save download: {}", target.display()),
        source: Some(e.error),
    })?;

    Ok(SavedFile {
        path: target,
        size_bytes: payload.len() as u64,
    })
}

#[async_trait]
impl DownloadSink for DirectorySink {
    async fn save(&self, filename: &str, payload: Bytes) -> AppResult<SavedFile> {
        validate_filename(filename)?;

        let dir = self.dir.clone();
        let name = filename.to_string();
        let saved = tokio::task::spawn_blocking(move || write_staged(&dir, &name, &payload))
            .await
            .map_err(|e| AppError::storage(format!("Download task failed: {e}")))??;

        info!(path = %saved.path.display(), size = saved.size_bytes, "Download saved");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_publishes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path().join("downloads"));

        let saved = sink
            .save("logs.zip", Bytes::from_static(b"PK\x03\x04data"))
            .await
            .unwrap();

        assert_eq!(saved.size_bytes, 8);
        assert_eq!(std::fs::read(&saved.path).unwrap(), b"PK\x03\x04data");

        let leftovers = std::fs::read_dir(dir.path().join("downloads")).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[tokio::test]
    async fn test_overwrites_existing() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());
        sink.save("logs.zip", Bytes::from_static(b"old")).await.unwrap();
        let saved = sink.save("logs.zip", Bytes::from_static(b"new")).await.unwrap();
        assert_eq!(std::fs::read(saved.path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_rejects_path_traversal() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DirectorySink::new(dir.path());
        let err = sink
            .save("../escape.zip", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), opsconsole_core::ErrorKind::Validation);
    }
}

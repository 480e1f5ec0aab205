//! JSON-file key/value store.
//!
//! The whole map is loaded once on open and rewritten on every mutation.
//! Writes go to a temporary file in the same directory which is then
//! renamed over the target, so a crash never leaves a truncated file.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::NamedTempFile;
use tracing::debug;

use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;
use opsconsole_core::traits::storage::KeyValueStore;

/// File-backed store mirroring browser local storage semantics.
#[derive(Debug)]
pub struct FileStore {
    /// Location of the JSON document.
    path: PathBuf,
    /// In-memory copy, authoritative between writes.
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty one if the file is missing.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path).map_err(|e| AppError::Storage {
                message: format!("Failed to read client state: {}", path.display()),
                source: Some(e),
            })?;
            if raw.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&raw).map_err(|e| AppError::Serialization {
                    message: format!("Corrupt client state file: {}", path.display()),
                    source: Some(e),
                })?
            }
        } else {
            BTreeMap::new()
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened client state");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| AppError::Storage {
            message: format!("Failed to create state directory: {}", dir.display()),
            source: Some(e),
        })?;

        let json = serde_json::to_vec_pretty(entries)?;
        let mut staged = NamedTempFile::new_in(&dir)?;
        staged.write_all(&json)?;
        staged.flush()?;
        staged.persist(&self.path).map_err(|e| AppError::Storage {
            message: format!("Failed to write client state: {}", self.path.display()),
            source: Some(e.error),
        })?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.lock();
        if entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.lock();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.flush(&entries)
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.lock().keys().cloned().collect())
    }
}

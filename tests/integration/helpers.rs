//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use opsconsole_cli::ConsoleContext;
use opsconsole_client::testutil::MockBackend;
use opsconsole_core::config::ConsoleConfig;
use opsconsole_core::traits::storage::KeyValueStore;
use opsconsole_storage::{DirectorySink, FileStore};

/// A console wired to a scripted backend, with client state and downloads
/// in a temporary directory.
pub struct TestConsole {
    /// Scripted backend
    pub backend: Arc<MockBackend>,
    /// File-backed client storage
    pub store: Arc<FileStore>,
    /// The wired console
    pub ctx: ConsoleContext,
    /// Keeps the temporary directory alive
    pub dir: TempDir,
}

impl TestConsole {
    /// Console with default configuration and an empty state file.
    pub fn new() -> Self {
        Self::with_config(ConsoleConfig::default())
    }

    /// Console with a custom configuration.
    pub fn with_config(mut config: ConsoleConfig) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        config.storage.state_file = dir
            .path()
            .join("local_storage.json")
            .display()
            .to_string();
        config.storage.download_dir = dir.path().join("downloads").display().to_string();

        let backend = Arc::new(MockBackend::new());
        let store = Arc::new(FileStore::open(&config.storage.state_file).expect("Failed to open state"));
        let sink = Arc::new(DirectorySink::new(&config.storage.download_dir));
        let ctx = ConsoleContext::with_parts(config, store.clone(), backend.clone(), sink)
            .expect("Failed to build console");

        Self {
            backend,
            store,
            ctx,
            dir,
        }
    }

    /// Build a fresh console over the same state file, as the next CLI
    /// invocation would.
    pub fn reopen(&self) -> ConsoleContext {
        let config = self.ctx.config.clone();
        let store = Arc::new(FileStore::open(&config.storage.state_file).expect("Failed to open state"));
        let sink = Arc::new(DirectorySink::new(&config.storage.download_dir));
        ConsoleContext::with_parts(config, store, self.backend.clone(), sink)
            .expect("Failed to build console")
    }

    /// Store a session token as if a previous login had succeeded.
    pub fn sign_in(&self, token: &str) {
        self.store
            .set(opsconsole_core::keys::TOKEN, token)
            .expect("Failed to store token");
    }

    /// Path of the client state file.
    pub fn state_file(&self) -> PathBuf {
        self.dir.path().join("local_storage.json")
    }

    /// Path of the downloads directory.
    pub fn downloads(&self) -> PathBuf {
        self.dir.path().join("downloads")
    }

    /// `"METHOD /path"` for every request the backend saw.
    pub fn calls(&self) -> Vec<String> {
        self.backend
            .requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.url.path()))
            .collect()
    }
}

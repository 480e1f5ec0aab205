//! Client storage and download configuration.

use serde::{Deserialize, Serialize};

/// Where client state and downloaded archives live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON file that plays the role of browser local storage.
    #[serde(default = "default_state_file")]
    pub state_file: String,
    /// Directory receiving downloaded log archives.
    #[serde(default = "default_download_dir")]
    pub download_dir: String,
    /// File name given to downloaded log archives.
    #[serde(default = "default_archive_name")]
    pub archive_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            download_dir: default_download_dir(),
            archive_name: default_archive_name(),
        }
    }
}

fn default_state_file() -> String {
    "data/opsconsole/local_storage.json".to_string()
}

fn default_download_dir() -> String {
    "downloads".to_string()
}

fn default_archive_name() -> String {
    "logs.zip".to_string()
}

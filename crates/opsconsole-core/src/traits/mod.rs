//! Core traits defined in `opsconsole-core` and implemented by other crates.

pub mod download;
pub mod navigator;
pub mod session;
pub mod storage;

pub use download::{DownloadSink, SavedFile};
pub use navigator::Navigator;
pub use session::AuthenticationState;
pub use storage::KeyValueStore;

//! # opsconsole-storage
//!
//! Client-side persistence for OpsConsole.
//!
//! - **memory**: process-local [`MemoryStore`] backed by a concurrent map
//! - **file**: [`FileStore`], a JSON file written through on every mutation
//! - **download**: [`DirectorySink`] publishing downloaded archives to a directory

pub mod download;
pub mod file;
pub mod memory;

pub use download::DirectorySink;
pub use file::FileStore;
pub use memory::MemoryStore;

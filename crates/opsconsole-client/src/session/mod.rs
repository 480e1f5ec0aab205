//! Session lifecycle: login, logout, token access, inactivity auto-logout,
//! and user administration.

pub mod manager;
pub mod timer;

pub use manager::SessionManager;
pub use timer::{ExpiryCallback, InactivityTimer};

//! # opsconsole-shell
//!
//! The navigation and presentation state of the operations console.
//!
//! ## Modules
//!
//! - **router**: view table, the authentication guard, and the [`Router`]
//!   that applies it on every navigation
//! - **layout**: theme preferences persisted to client storage and the
//!   ephemeral menu/sidebar state

pub mod layout;
pub mod router;

pub use layout::{LayoutPreferences, LayoutState, LayoutStore, MenuMode};
pub use router::{GuardDecision, Navigation, Route, RouteGuard, Router, StoredSession};

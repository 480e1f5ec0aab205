//! Client storage keys.
//!
//! These are the exact keys the console persists, shared with any other
//! client of the same storage so state survives across front ends.

/// Session token.
pub const TOKEN: &str = "token";

/// Dark-mode flag, stored as `"true"` / `"false"`.
pub const DARK_THEME: &str = "darkTheme";

/// Primary colour name.
pub const PRIMARY: &str = "primary";

/// Surface palette name.
pub const SURFACE: &str = "surface";

/// Time of the last user activity in the session, RFC 3339 UTC.
pub const LAST_ACTIVITY: &str = "lastActivity";

/// Every key the console writes.
pub const ALL: [&str; 5] = [TOKEN, LAST_ACTIVITY, DARK_THEME, PRIMARY, SURFACE];

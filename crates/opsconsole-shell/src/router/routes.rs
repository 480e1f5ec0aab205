//! The console's view table.

use serde::Serialize;

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Canonical path.
    pub path: &'static str,
    /// View name.
    pub name: &'static str,
    /// Only reachable with a stored session.
    pub requires_auth: bool,
    /// Entry view for visitors without a session.
    pub guest: bool,
}

const fn protected(path: &'static str, name: &'static str) -> Route {
    Route {
        path,
        name,
        requires_auth: true,
        guest: false,
    }
}

const fn open(path: &'static str, name: &'static str) -> Route {
    Route {
        path,
        name,
        requires_auth: false,
        guest: false,
    }
}

/// All views, the login entry point first.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "login",
        requires_auth: false,
        guest: true,
    },
    protected("/home", "dashboard"),
    protected("/uikit/Users", "users"),
    protected("/uikit/RegionList", "RegionList"),
    protected("/uikit/ServersDB", "ServersDB"),
    protected("/uikit/Agents", "Agents"),
    // Roles carries no session requirement; the backend still rejects
    // role calls without a token.
    open("/uikit/Roles", "Roles"),
    protected("/uikit/Audit", "Audit"),
    protected("/uikit/FindLog", "FindLog"),
    protected("/uikit/FindLogTran", "FindLogTran"),
    protected("/uikit/LogTran", "LogTran"),
    protected("/uikit/ArchiveLog", "ArchiveLog"),
    protected("/uikit/Jobs", "Jobs"),
    protected("/uikit/Propierties", "Propierties"),
    protected("/uikit/Running", "Running"),
    protected("/uikit/support", "Support"),
];

/// Strip the query, fragment and trailing slash; `""` becomes `"/"`.
pub fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default().trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Look up a view by path, ignoring case and a trailing slash.
pub fn find_route(path: &str) -> Option<&'static Route> {
    let path = normalize_path(path);
    ROUTES.iter().find(|route| route.path.eq_ignore_ascii_case(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_is_case_insensitive() {
        let route = find_route("/UIKIT/agents/").unwrap();
        assert_eq!(route.name, "Agents");
        assert!(route.requires_auth);
    }

    #[test]
    fn test_login_is_guest_only() {
        let login = find_route("").unwrap();
        assert!(login.guest);
        assert!(!login.requires_auth);
    }

    #[test]
    fn test_protected_views() {
        let open: Vec<_> = ROUTES
            .iter()
            .filter(|r| !r.requires_auth)
            .map(|r| r.path)
            .collect();
        assert_eq!(open, ["/", "/uikit/Roles"]);
        assert_eq!(ROUTES.iter().filter(|r| r.guest).count(), 1);
    }

    #[test]
    fn test_unknown_path() {
        assert!(find_route("/uikit/Nope").is_none());
        assert_eq!(normalize_path("/home?tab=1"), "/home");
    }
}

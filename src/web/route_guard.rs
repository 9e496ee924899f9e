//! Cookie-based route guard
//!
//! Decides per request path whether to continue or redirect, based only on
//! whether the session cookie is present. The token is never validated here.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

/// Session cookie name
pub const SESSION_COOKIE: &str = "_token";

const DASHBOARD: &str = "/dashboard";

lazy_static! {
    /// Paths the guard never sees: API routes, build assets and the favicon
    static ref UNGUARDED_PATH: Regex = Regex::new(r"^/(api|_next/static|_next/image|favicon\.ico)").unwrap();
}

/// Outcome of the guard for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", content = "target", rename_all = "lowercase")]
pub enum RouteDecision {
    Next,
    Redirect(String),
}

/// Whether the guard applies to `path` at all
pub fn is_guarded_path(path: &str) -> bool {
    !UNGUARDED_PATH.is_match(path)
}

/// Whether `path` is reachable without a session.
///
/// Matches by prefix, so `/login/reset` is public too.
pub fn is_public_route<S: AsRef<str>>(path: &str, public_routes: &[S]) -> bool {
    public_routes.iter().any(|route| path.starts_with(route.as_ref()))
}

/// Decide what to do with a request to `path`.
///
/// - `/` goes to the dashboard with a session, and stays otherwise
/// - protected paths without a session go to `/`
/// - `/login` and `/register` with a session go to the dashboard
pub fn route_decision<S: AsRef<str>>(path: &str, has_token: bool, public_routes: &[S]) -> RouteDecision {
    if !is_guarded_path(path) {
        return RouteDecision::Next;
    }

    if path == "/" {
        return if has_token {
            RouteDecision::Redirect(DASHBOARD.to_string())
        } else {
            RouteDecision::Next
        };
    }

    if !has_token && !is_public_route(path, public_routes) {
        return RouteDecision::Redirect("/".to_string());
    }

    if has_token && (path == "/login" || path == "/register") {
        return RouteDecision::Redirect(DASHBOARD.to_string());
    }

    RouteDecision::Next
}

/// Whether a `Cookie` header carries the session cookie. Presence only.
pub fn has_session_cookie(cookie_header: &str) -> bool {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.split_once('=').map(|(name, _)| name).or(Some(pair)))
        .any(|name| name.trim() == SESSION_COOKIE)
}

//! Browser-facing plumbing: query strings, tab/URL sync and the route guard

pub mod query;
pub mod route_guard;
pub mod tab_sync;

pub use query::{to_query_params, QueryParams};
pub use route_guard::{has_session_cookie, is_public_route, route_decision, RouteDecision, SESSION_COOKIE};
pub use tab_sync::{History, Location, MemoryHistory, TabSync, TabSyncOptions};

//! Route command - Evaluate the route guard

use std::path::Path;

use crate::config::load_config;
use crate::errors::Result;
use crate::fs::resolve_cwd;
use crate::web::{has_session_cookie, route_decision, RouteDecision};

use super::print_json;

pub fn run(cwd: Option<&Path>, path: &str, cookie: &str, json: bool) -> Result<()> {
    let config = load_config(&resolve_cwd(cwd))?;
    let decision = route_decision(path, has_session_cookie(cookie), &config.public_routes);

    if json {
        return print_json(&decision);
    }

    match decision {
        RouteDecision::Next => println!("next"),
        RouteDecision::Redirect(target) => println!("redirect {}", target),
    }
    Ok(())
}

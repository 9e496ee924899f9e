//! Transitions command - List or check workflow transitions

use std::path::Path;

use serde::Serialize;

use crate::domain::{get_allowed_task_transitions, get_allowed_transitions};
use crate::errors::{AlsoNotifyError, Result};
use crate::schemas::{RequirementStatus, TaskRole, TaskStatus, UserRole};

use super::print_json;

#[derive(Serialize)]
struct TransitionReport {
    from: String,
    role: String,
    allowed: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid: Option<bool>,
}

/// List the allowed targets from `from`, or check `from -> to`.
///
/// A disallowed `to` is reported as a `StateTransition` error so the exit
/// code reflects it.
pub fn run(_cwd: Option<&Path>, from: &str, to: Option<&str>, role: &str, task: bool, json: bool) -> Result<()> {
    let (from, to, role, allowed) = if task {
        let from: TaskStatus = from.parse()?;
        let to = to.map(str::parse::<TaskStatus>).transpose()?;
        let role: TaskRole = role.parse().map_err(AlsoNotifyError::SchemaValidation)?;
        let allowed = get_allowed_task_transitions(from, role);
        (
            from.to_string(),
            to.map(|t| t.to_string()),
            role.to_string(),
            allowed.iter().map(ToString::to_string).collect::<Vec<_>>(),
        )
    } else {
        let from: RequirementStatus = from.parse()?;
        let to = to.map(str::parse::<RequirementStatus>).transpose()?;
        let role: UserRole = role.parse().map_err(AlsoNotifyError::SchemaValidation)?;
        let allowed = get_allowed_transitions(from, role);
        (
            from.to_string(),
            to.map(|t| t.to_string()),
            role.to_string(),
            allowed.iter().map(ToString::to_string).collect::<Vec<_>>(),
        )
    };

    let valid = to.as_ref().map(|t| allowed.contains(t));
    let report = TransitionReport {
        from,
        role,
        allowed,
        to,
        valid,
    };

    if json {
        print_json(&report)?;
    } else if let (Some(to), Some(valid)) = (&report.to, report.valid) {
        println!("{} -> {} ({}): {}", report.from, to, report.role, if valid { "allowed" } else { "not allowed" });
    } else if report.allowed.is_empty() {
        println!("{} ({}): no transitions", report.from, report.role);
    } else {
        println!("{} ({}): {}", report.from, report.role, report.allowed.join(", "));
    }

    match (&report.to, report.valid) {
        (Some(to), Some(false)) => Err(AlsoNotifyError::StateTransition(format!(
            "{} cannot move from {} to {}",
            report.role, report.from, to
        ))),
        _ => Ok(()),
    }
}

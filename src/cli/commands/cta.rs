//! CTA command - Resolve call-to-action buttons

use std::path::Path;

use crate::domain::{
    get_requirement_cta_config_str, get_task_cta_config_str, ActionConfig, RequirementContext, TaskCtaContext,
};
use crate::errors::Result;
use crate::schemas::{ExecutionMode, RequirementType, UserRole};

use super::print_json;

/// Flags describing the viewer of a requirement
#[derive(Debug, Clone, Copy)]
pub struct RequirementFlags {
    pub role: UserRole,
    pub requirement_type: RequirementType,
    pub mapped: bool,
    pub rejected_by_sender: bool,
    pub quoted: bool,
}

pub fn run_requirement(_cwd: Option<&Path>, status: &str, flags: RequirementFlags, json: bool) -> Result<()> {
    let context = RequirementContext {
        is_workspace_mapped: flags.mapped,
        is_rejected_by_sender: flags.rejected_by_sender,
        has_quoted_price: flags.quoted,
        ..Default::default()
    };
    let cta = get_requirement_cta_config_str(status, flags.role, &context, flags.requirement_type);

    if json {
        return print_json(&cta);
    }

    println!("{} [{}]{}", cta.display_status, cta.tab, if cta.is_pending { " (pending)" } else { "" });
    print_action("primary", cta.primary_action.as_ref());
    print_action("secondary", cta.secondary_action.as_ref());
    Ok(())
}

pub fn run_task(_cwd: Option<&Path>, status: &str, context: TaskCtaContext, json: bool) -> Result<()> {
    let cta = get_task_cta_config_str(status, &context);

    if json {
        return print_json(&cta);
    }

    println!("{} [{}]", cta.display_status, cta.tab);
    print_action("primary", cta.primary_action.as_ref());
    print_action("secondary", cta.secondary_action.as_ref());
    Ok(())
}

/// Task viewer flags to context
pub fn task_context(leader: bool, member: bool, current_turn: bool, sequential: bool) -> TaskCtaContext {
    TaskCtaContext {
        is_leader: leader,
        is_member: member,
        is_current_turn: current_turn,
        execution_mode: if sequential {
            ExecutionMode::Sequential
        } else {
            ExecutionMode::Parallel
        },
    }
}

fn print_action<S: std::fmt::Display>(slot: &str, action: Option<&ActionConfig<S>>) {
    let Some(action) = action else {
        return;
    };
    let target = action
        .next_status
        .as_ref()
        .map(|s| format!(" -> {}", s))
        .unwrap_or_default();
    let disabled = if action.enabled { "" } else { " (disabled)" };
    println!("  {}: {}{}{}", slot, action.label, target, disabled);
}

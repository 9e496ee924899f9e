//! Turn command - Resolve a member's action on a task

use std::path::Path;

use crate::domain::{resolve_member_action, TurnDecision};
use crate::errors::Result;
use crate::fs::{read_json, resolve_cwd};
use crate::schemas::Task;

use super::print_json;

pub fn run(cwd: Option<&Path>, task_path: &Path, user_id: u64, json: bool) -> Result<()> {
    let path = resolve_cwd(cwd).join(task_path);
    let task: Task = read_json(&path)?;
    let decision = resolve_member_action(&task, user_id);

    if json {
        return print_json(&decision);
    }

    match &decision {
        TurnDecision::NotAssigned => println!("User {} is not assigned to task {}", user_id, task.id),
        TurnDecision::AlreadyCompleted => println!("You completed your part"),
        TurnDecision::Ready {
            label, hint, request, ..
        } => {
            println!("{}", label);
            if let Some(hint) = hint {
                println!("  {}", hint);
            }
            if let Some(next) = request.pass_turn_to {
                println!("  turn passes to user {}", next);
            }
        }
        TurnDecision::Waiting { reason } => println!("Waiting for Turn: {}", reason),
    }
    Ok(())
}

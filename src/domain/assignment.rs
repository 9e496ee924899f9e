//! Task assignment and turn model
//!
//! Given a task and the acting user, decides which member action (start or
//! complete) is available and whether it may be taken now. In sequential
//! mode only the turn holder acts; in parallel mode everyone does.
//!
//! Passing the turn to the next member is the backend's job. This module
//! only describes the request to send.

use serde::Serialize;

use crate::schemas::{ExecutionMode, MemberStatus, Task, TaskMember, TaskStatus};

use super::cta::Icon;

/// Member-level action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberAction {
    Start,
    Complete,
}

/// Mutation the caller should send when the member acts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRequest {
    pub task_id: u64,
    pub user_id: u64,
    /// Member status to set
    pub status: MemberStatus,
    /// Sequential completion only: who would receive the turn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pass_turn_to: Option<u64>,
}

/// What the acting user can do on a task
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum TurnDecision {
    /// The user is not a member of the task
    NotAssigned,
    /// The user's part is done
    AlreadyCompleted,
    /// The user may act now
    Ready {
        action: MemberAction,
        label: &'static str,
        #[serde(skip_serializing_if = "Option::is_none")]
        hint: Option<&'static str>,
        icon: Icon,
        request: TurnRequest,
    },
    /// Sequential task, someone else's turn
    Waiting { reason: String },
}

impl TurnDecision {
    pub fn can_act(&self) -> bool {
        matches!(self, TurnDecision::Ready { .. })
    }

    pub fn action(&self) -> Option<MemberAction> {
        match self {
            TurnDecision::Ready { action, .. } => Some(*action),
            _ => None,
        }
    }

    /// Button label; the locked label while waiting
    pub fn label(&self) -> Option<&'static str> {
        match self {
            TurnDecision::Ready { label, .. } => Some(label),
            TurnDecision::Waiting { .. } => Some("Waiting for Turn"),
            TurnDecision::NotAssigned | TurnDecision::AlreadyCompleted => None,
        }
    }
}

/// Members in queue order.
///
/// Shared queue positions are a data anomaly; they are broken by user id
/// and logged.
pub fn ordered_members(task: &Task) -> Vec<&TaskMember> {
    let mut members: Vec<&TaskMember> = task.task_members.iter().collect();
    members.sort_by_key(|m| (m.queue_order, m.user_id));

    for pair in members.windows(2) {
        if pair[0].queue_order == pair[1].queue_order {
            tracing::warn!(
                "Task {} members {} and {} share queue position {}; ordering by user id",
                task.id,
                pair[0].user_id,
                pair[1].user_id,
                pair[0].queue_order
            );
        }
    }
    members
}

/// The member holding the turn in a sequential task.
///
/// When several members claim it, the earliest in queue order wins.
pub fn current_turn_holder(task: &Task) -> Option<&TaskMember> {
    let holders: Vec<&TaskMember> = ordered_members(task)
        .into_iter()
        .filter(|m| m.is_current_turn)
        .collect();

    if holders.len() > 1 {
        tracing::warn!(
            "Task {} has {} members holding the turn; using queue position {}",
            task.id,
            holders.len(),
            holders[0].queue_order
        );
    }
    holders.first().copied()
}

/// The member who would receive the turn after `user_id` completes: the next
/// member by queue order that is not completed.
pub fn next_turn_holder(task: &Task, user_id: u64) -> Option<&TaskMember> {
    ordered_members(task)
        .into_iter()
        .skip_while(|m| m.user_id != user_id)
        .skip(1)
        .find(|m| !m.is_completed())
}

/// Resolve the action available to `user_id` on `task`.
pub fn resolve_member_action(task: &Task, user_id: u64) -> TurnDecision {
    let Some(member) = task.member(user_id) else {
        return TurnDecision::NotAssigned;
    };

    if member.is_completed() {
        return TurnDecision::AlreadyCompleted;
    }

    let started = member.status == TaskStatus::InProgress;

    match task.execution_mode {
        ExecutionMode::Sequential if !member.is_current_turn => TurnDecision::Waiting {
            reason: waiting_reason(task),
        },
        ExecutionMode::Sequential if started => TurnDecision::Ready {
            action: MemberAction::Complete,
            label: "Complete & Pass Baton",
            hint: Some("Next member will be notified"),
            icon: Icon::ArrowRight,
            request: TurnRequest {
                task_id: task.id,
                user_id,
                status: TaskStatus::Completed,
                pass_turn_to: next_turn_holder(task, user_id).map(|m| m.user_id),
            },
        },
        ExecutionMode::Sequential => TurnDecision::Ready {
            action: MemberAction::Start,
            label: "Start My Turn",
            hint: Some("Timer will start automatically"),
            icon: Icon::Play,
            request: start_request(task, user_id),
        },
        ExecutionMode::Parallel if started => TurnDecision::Ready {
            action: MemberAction::Complete,
            label: "Mark as Completed",
            hint: None,
            icon: Icon::Check,
            request: TurnRequest {
                task_id: task.id,
                user_id,
                status: TaskStatus::Completed,
                pass_turn_to: None,
            },
        },
        ExecutionMode::Parallel => TurnDecision::Ready {
            action: MemberAction::Start,
            label: "Start Working",
            hint: None,
            icon: Icon::Play,
            request: start_request(task, user_id),
        },
    }
}

fn start_request(task: &Task, user_id: u64) -> TurnRequest {
    TurnRequest {
        task_id: task.id,
        user_id,
        status: TaskStatus::InProgress,
        pass_turn_to: None,
    }
}

fn waiting_reason(task: &Task) -> String {
    match current_turn_holder(task) {
        // queue position 0 means unset upstream
        Some(holder) if holder.queue_order == 0 => "Waiting for member #?".to_string(),
        Some(holder) => format!("Waiting for member #{}", holder.queue_order),
        None => "Waiting for previous steps".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential(members: Vec<TaskMember>) -> Task {
        Task::new(7, "Design review", ExecutionMode::Sequential).with_members(members)
    }

    fn two_member_task() -> Task {
        sequential(vec![
            TaskMember::new(10, 1).with_turn(true),
            TaskMember::new(20, 2),
        ])
    }

    #[test]
    fn test_not_assigned() {
        assert_eq!(resolve_member_action(&two_member_task(), 99), TurnDecision::NotAssigned);
    }

    #[test]
    fn test_turn_holder_starts_then_completes() {
        let task = two_member_task();
        let decision = resolve_member_action(&task, 10);
        assert_eq!(decision.action(), Some(MemberAction::Start));
        assert_eq!(decision.label(), Some("Start My Turn"));

        let task = sequential(vec![
            TaskMember::new(10, 1).with_turn(true).with_status(TaskStatus::InProgress),
            TaskMember::new(20, 2),
        ]);
        match resolve_member_action(&task, 10) {
            TurnDecision::Ready { action, label, request, .. } => {
                assert_eq!(action, MemberAction::Complete);
                assert_eq!(label, "Complete & Pass Baton");
                assert_eq!(request.status, TaskStatus::Completed);
                assert_eq!(request.pass_turn_to, Some(20));
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_waiting_member_names_turn_holder() {
        let decision = resolve_member_action(&two_member_task(), 20);
        assert!(!decision.can_act());
        assert_eq!(
            decision,
            TurnDecision::Waiting {
                reason: "Waiting for member #1".to_string()
            }
        );
    }

    #[test]
    fn test_waiting_without_turn_holder() {
        let task = sequential(vec![TaskMember::new(10, 1), TaskMember::new(20, 2)]);
        assert_eq!(
            resolve_member_action(&task, 20),
            TurnDecision::Waiting {
                reason: "Waiting for previous steps".to_string()
            }
        );
    }

    #[test]
    fn test_completed_member_has_no_action() {
        let task = sequential(vec![
            TaskMember::new(10, 1).with_status(TaskStatus::Completed),
            TaskMember::new(20, 2).with_turn(true),
        ]);
        assert_eq!(resolve_member_action(&task, 10), TurnDecision::AlreadyCompleted);
    }

    #[test]
    fn test_parallel_ignores_turn() {
        let task = Task::new(8, "Translations", ExecutionMode::Parallel).with_members(vec![
            TaskMember::new(10, 1),
            TaskMember::new(20, 2).with_status(TaskStatus::InProgress),
        ]);
        assert_eq!(resolve_member_action(&task, 10).label(), Some("Start Working"));
        match resolve_member_action(&task, 20) {
            TurnDecision::Ready { label, request, .. } => {
                assert_eq!(label, "Mark as Completed");
                assert_eq!(request.pass_turn_to, None);
            }
            other => panic!("expected Ready, got {:?}", other),
        }
    }

    #[test]
    fn test_next_turn_skips_completed_members() {
        let task = sequential(vec![
            TaskMember::new(10, 1).with_turn(true).with_status(TaskStatus::InProgress),
            TaskMember::new(20, 2).with_status(TaskStatus::Completed),
            TaskMember::new(30, 3),
        ]);
        assert_eq!(next_turn_holder(&task, 10).map(|m| m.user_id), Some(30));
        assert!(next_turn_holder(&task, 30).is_none());
    }

    #[test]
    fn test_duplicate_queue_order_breaks_ties_by_user_id() {
        let task = sequential(vec![
            TaskMember::new(30, 1),
            TaskMember::new(20, 1),
            TaskMember::new(10, 2),
        ]);
        let ids: Vec<u64> = ordered_members(&task).iter().map(|m| m.user_id).collect();
        assert_eq!(ids, vec![20, 30, 10]);
    }

    #[test]
    fn test_multiple_turn_holders_lowest_position_wins() {
        let task = sequential(vec![
            TaskMember::new(10, 3).with_turn(true),
            TaskMember::new(20, 2).with_turn(true),
            TaskMember::new(30, 4),
        ]);
        assert_eq!(current_turn_holder(&task).map(|m| m.user_id), Some(20));
        assert_eq!(
            resolve_member_action(&task, 30),
            TurnDecision::Waiting {
                reason: "Waiting for member #2".to_string()
            }
        );
    }

    #[test]
    fn test_unset_queue_position() {
        let task = sequential(vec![TaskMember::new(10, 0).with_turn(true), TaskMember::new(20, 1)]);
        assert_eq!(
            resolve_member_action(&task, 20),
            TurnDecision::Waiting {
                reason: "Waiting for member #?".to_string()
            }
        );
    }
}

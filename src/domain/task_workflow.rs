//! Task workflow state machine
//!
//! Normal flow: Assigned → In_Progress → Review → Completed.
//! Blocking: Stuck, Impediment. Scheduling: Delayed.

use crate::schemas::{TaskRole, TaskStatus};

use TaskStatus::*;

/// Transitions available to the task leader (the full table).
pub fn leader_transitions(from: TaskStatus) -> &'static [TaskStatus] {
    match from {
        Assigned => &[InProgress, Delayed],
        InProgress => &[Completed, Review, Stuck, Impediment, Delayed],
        Review => &[Completed, InProgress, Stuck],
        Stuck => &[InProgress, Impediment],
        Impediment => &[InProgress, Stuck],
        Delayed => &[Assigned, InProgress],
        Completed => &[Review],
    }
}

/// Transitions available to an assignee.
///
/// Approving review, reopening and reassigning belong to the leader.
pub fn member_transitions(from: TaskStatus) -> &'static [TaskStatus] {
    match from {
        Assigned => &[InProgress, Delayed],
        InProgress => &[Completed, Review, Stuck, Impediment, Delayed],
        Review => &[InProgress, Stuck],
        Stuck => &[InProgress, Impediment],
        Impediment => &[InProgress, Stuck],
        Delayed => &[InProgress],
        Completed => &[],
    }
}

/// Gets all allowed task transitions from a status for a role.
pub fn get_allowed_task_transitions(from: TaskStatus, role: TaskRole) -> &'static [TaskStatus] {
    match role {
        TaskRole::Leader => leader_transitions(from),
        TaskRole::Member => member_transitions(from),
    }
}

/// Checks if a task status transition is valid for the given role.
pub fn is_task_transition_valid(from: TaskStatus, to: TaskStatus, role: TaskRole) -> bool {
    get_allowed_task_transitions(from, role).contains(&to)
}

/// String form of [`is_task_transition_valid`]; unknown values yield false.
pub fn is_task_transition_valid_str(from: &str, to: &str, role: &str) -> bool {
    let (Some(from), Some(to)) = (TaskStatus::canonicalize(from), TaskStatus::canonicalize(to)) else {
        tracing::debug!("Task transition lookup with unknown status: {} -> {}", from, to);
        return false;
    };
    match role.parse::<TaskRole>() {
        Ok(role) => is_task_transition_valid(from, to, role),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::TASK_STATUSES;

    #[test]
    fn test_member_flow() {
        assert!(is_task_transition_valid(Assigned, InProgress, TaskRole::Member));
        assert!(!is_task_transition_valid(Assigned, Completed, TaskRole::Member));
        assert!(is_task_transition_valid(InProgress, Review, TaskRole::Member));
        assert!(is_task_transition_valid(InProgress, Completed, TaskRole::Member));
    }

    #[test]
    fn test_leader_only_transitions() {
        assert!(is_task_transition_valid(Review, Completed, TaskRole::Leader));
        assert!(!is_task_transition_valid(Review, Completed, TaskRole::Member));
        assert!(is_task_transition_valid(Completed, Review, TaskRole::Leader));
        assert!(!is_task_transition_valid(Completed, Review, TaskRole::Member));
        assert!(is_task_transition_valid(Delayed, Assigned, TaskRole::Leader));
        assert!(!is_task_transition_valid(Delayed, Assigned, TaskRole::Member));
    }

    #[test]
    fn test_member_table_is_subset_of_leader_table() {
        for from in TASK_STATUSES {
            for to in member_transitions(*from) {
                assert!(leader_transitions(*from).contains(to), "{} -> {}", from, to);
            }
        }
    }

    #[test]
    fn test_get_allowed_task_transitions() {
        assert_eq!(get_allowed_task_transitions(Assigned, TaskRole::Leader), &[InProgress, Delayed]);
        assert!(get_allowed_task_transitions(Completed, TaskRole::Member).is_empty());
    }

    #[test]
    fn test_string_lookup() {
        assert!(is_task_transition_valid_str("Todo", "In Progress", "member"));
        assert!(!is_task_transition_valid_str("Blocked", "In_Progress", "member"));
        assert!(!is_task_transition_valid_str("Assigned", "In_Progress", "owner"));
    }
}

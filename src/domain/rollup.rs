//! Status rollup
//!
//! Derives a task's status from its members and a requirement's status from
//! its tasks.

use crate::schemas::{RequirementStatus, Task, TaskMember, TaskStatus};

/// Aggregate member statuses into a task status.
///
/// Priority, most urgent first: Stuck, Impediment, In_Progress, all
/// Completed, Review, Delayed, otherwise Assigned. No members means Assigned.
pub fn aggregate_member_statuses(members: &[TaskMember]) -> TaskStatus {
    if members.is_empty() {
        return TaskStatus::Assigned;
    }

    let any = |status: TaskStatus| members.iter().any(|m| m.status == status);

    if any(TaskStatus::Stuck) {
        TaskStatus::Stuck
    } else if any(TaskStatus::Impediment) {
        TaskStatus::Impediment
    } else if any(TaskStatus::InProgress) {
        TaskStatus::InProgress
    } else if members.iter().all(TaskMember::is_completed) {
        TaskStatus::Completed
    } else if any(TaskStatus::Review) {
        TaskStatus::Review
    } else if any(TaskStatus::Delayed) {
        TaskStatus::Delayed
    } else {
        TaskStatus::Assigned
    }
}

/// Derive a requirement status from its tasks.
///
/// An open revision task wins, then all-completed (ready for review), then
/// any task in progress. Blocked tasks do not move the requirement.
pub fn derive_requirement_status_from_tasks(tasks: &[Task]) -> RequirementStatus {
    if tasks.is_empty() {
        return RequirementStatus::Assigned;
    }

    if tasks
        .iter()
        .any(|t| t.is_revision && t.status != TaskStatus::Completed)
    {
        return RequirementStatus::Revision;
    }

    if tasks.iter().all(|t| t.status == TaskStatus::Completed) {
        return RequirementStatus::Review;
    }

    if tasks.iter().any(|t| t.status == TaskStatus::InProgress) {
        return RequirementStatus::InProgress;
    }

    RequirementStatus::Assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::ExecutionMode;

    fn members(statuses: &[TaskStatus]) -> Vec<TaskMember> {
        statuses
            .iter()
            .enumerate()
            .map(|(i, s)| TaskMember::new(i as u64 + 1, i as u32 + 1).with_status(*s))
            .collect()
    }

    fn task(status: TaskStatus, is_revision: bool) -> Task {
        Task {
            status,
            is_revision,
            ..Task::new(1, "Task", ExecutionMode::Parallel)
        }
    }

    #[test]
    fn test_empty_members_is_assigned() {
        assert_eq!(aggregate_member_statuses(&[]), TaskStatus::Assigned);
    }

    #[test]
    fn test_blocked_member_wins() {
        use TaskStatus::*;
        assert_eq!(aggregate_member_statuses(&members(&[InProgress, Stuck, Impediment])), Stuck);
        assert_eq!(aggregate_member_statuses(&members(&[InProgress, Impediment])), Impediment);
    }

    #[test]
    fn test_any_active_member_makes_task_active() {
        use TaskStatus::*;
        assert_eq!(aggregate_member_statuses(&members(&[InProgress, Assigned])), InProgress);
        assert_eq!(aggregate_member_statuses(&members(&[InProgress, Completed])), InProgress);
    }

    #[test]
    fn test_completed_requires_everyone() {
        use TaskStatus::*;
        assert_eq!(aggregate_member_statuses(&members(&[Completed, Completed])), Completed);
        assert_eq!(aggregate_member_statuses(&members(&[Completed, Review])), Review);
        assert_eq!(aggregate_member_statuses(&members(&[Completed, Delayed])), Delayed);
        assert_eq!(aggregate_member_statuses(&members(&[Completed, Assigned])), Assigned);
    }

    #[test]
    fn test_requirement_rollup() {
        use TaskStatus::*;
        assert_eq!(derive_requirement_status_from_tasks(&[]), RequirementStatus::Assigned);
        assert_eq!(
            derive_requirement_status_from_tasks(&[task(Completed, false), task(InProgress, true)]),
            RequirementStatus::Revision
        );
        assert_eq!(
            derive_requirement_status_from_tasks(&[task(Completed, false), task(Completed, true)]),
            RequirementStatus::Review
        );
        assert_eq!(
            derive_requirement_status_from_tasks(&[task(Completed, false), task(InProgress, false)]),
            RequirementStatus::InProgress
        );
        assert_eq!(
            derive_requirement_status_from_tasks(&[task(Stuck, false), task(Assigned, false)]),
            RequirementStatus::Assigned
        );
    }
}

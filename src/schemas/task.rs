//! Task schema - a unit of work within a requirement

use serde::{Deserialize, Serialize};

use crate::errors::AlsoNotifyError;

use super::status::canonical_status_key;

/// Workflow status of a task (and of each task member)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TaskStatus {
    Assigned,
    InProgress,
    Completed,
    Delayed,
    Impediment,
    Review,
    Stuck,
}

/// Members progress through the same vocabulary as tasks
pub type MemberStatus = TaskStatus;

/// Every task status, in backend enum order.
pub const TASK_STATUSES: &[TaskStatus] = &[
    TaskStatus::Assigned,
    TaskStatus::InProgress,
    TaskStatus::Completed,
    TaskStatus::Delayed,
    TaskStatus::Impediment,
    TaskStatus::Review,
    TaskStatus::Stuck,
];

impl TaskStatus {
    /// Backend spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Assigned => "Assigned",
            TaskStatus::InProgress => "In_Progress",
            TaskStatus::Completed => "Completed",
            TaskStatus::Delayed => "Delayed",
            TaskStatus::Impediment => "Impediment",
            TaskStatus::Review => "Review",
            TaskStatus::Stuck => "Stuck",
        }
    }

    /// Map any spelling of a status onto the vocabulary.
    ///
    /// The legacy "Todo" spelling is treated as Assigned.
    pub fn canonicalize(raw: &str) -> Option<Self> {
        let key = canonical_status_key(raw);
        if key == "todo" {
            return Some(TaskStatus::Assigned);
        }
        TASK_STATUSES
            .iter()
            .copied()
            .find(|status| canonical_status_key(status.as_str()) == key)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = AlsoNotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::canonicalize(s).ok_or_else(|| AlsoNotifyError::UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for TaskStatus {
    type Error = AlsoNotifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

/// How task members work on a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// All members can work simultaneously
    #[default]
    Parallel,
    /// Members work in queue order, one at a time
    Sequential,
}

impl std::str::FromStr for ExecutionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parallel" => Ok(ExecutionMode::Parallel),
            "sequential" => Ok(ExecutionMode::Sequential),
            _ => Err(format!("Unknown execution mode: {}", s)),
        }
    }
}

/// Role of the acting user on a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskRole {
    /// Task or requirement leader: reviews, reopens, reassigns
    Leader,
    /// Assignee doing the work
    Member,
}

impl std::fmt::Display for TaskRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskRole::Leader => write!(f, "leader"),
            TaskRole::Member => write!(f, "member"),
        }
    }
}

impl std::str::FromStr for TaskRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leader" => Ok(TaskRole::Leader),
            "member" => Ok(TaskRole::Member),
            _ => Err(format!("Unknown task role: {}", s)),
        }
    }
}

/// One user's participation in a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskMember {
    pub user_id: u64,

    pub status: MemberStatus,

    /// Authoritative only in sequential mode
    #[serde(default)]
    pub is_current_turn: bool,

    /// Position in the sequential queue
    #[serde(default)]
    pub queue_order: u32,

    /// Estimated effort in seconds
    #[serde(default)]
    pub estimated_time: Option<u64>,

    #[serde(default)]
    pub seconds_spent: u64,

    /// ISO 8601 start of the member's running worklog
    #[serde(default)]
    pub active_worklog_start_time: Option<String>,
}

impl TaskMember {
    /// Create a member in the Assigned state
    pub fn new(user_id: u64, queue_order: u32) -> Self {
        TaskMember {
            user_id,
            status: TaskStatus::Assigned,
            is_current_turn: false,
            queue_order,
            estimated_time: None,
            seconds_spent: 0,
            active_worklog_start_time: None,
        }
    }

    /// Return a new member with the given status
    pub fn with_status(mut self, status: MemberStatus) -> Self {
        self.status = status;
        self
    }

    /// Return a new member with the turn flag set
    pub fn with_turn(mut self, is_current_turn: bool) -> Self {
        self.is_current_turn = is_current_turn;
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// A unit of work under a requirement, executed by one or more members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,

    pub name: String,

    pub status: TaskStatus,

    #[serde(default)]
    pub execution_mode: ExecutionMode,

    #[serde(default)]
    pub task_members: Vec<TaskMember>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement_id: Option<u64>,

    /// Task created to address a requested revision
    #[serde(default)]
    pub is_revision: bool,
}

impl Task {
    /// Create an Assigned task with no members
    pub fn new(id: u64, name: impl Into<String>, execution_mode: ExecutionMode) -> Self {
        Task {
            id,
            name: name.into(),
            status: TaskStatus::Assigned,
            execution_mode,
            task_members: Vec::new(),
            requirement_id: None,
            is_revision: false,
        }
    }

    /// Return a new task with the given members
    pub fn with_members(mut self, members: Vec<TaskMember>) -> Self {
        self.task_members = members;
        self
    }

    /// Look up a member by user id
    pub fn member(&self, user_id: u64) -> Option<&TaskMember> {
        self.task_members.iter().find(|m| m.user_id == user_id)
    }

    /// Total seconds logged by every member
    pub fn total_seconds_spent(&self) -> u64 {
        self.task_members.iter().map(|m| m.seconds_spent).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_serialization() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"In_Progress\"");
        assert_eq!(serde_json::to_string(&TaskStatus::Review).unwrap(), "\"Review\"");
    }

    #[test]
    fn test_task_status_canonicalize() {
        assert_eq!(TaskStatus::canonicalize("In Progress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::canonicalize("completed"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::canonicalize("Todo"), Some(TaskStatus::Assigned));
        assert_eq!(TaskStatus::canonicalize("On_Hold"), None);
    }

    #[test]
    fn test_task_from_backend_json() {
        let json = r#"{
            "id": 7,
            "name": "Design review",
            "status": "In Progress",
            "execution_mode": "sequential",
            "task_members": [
                {"user_id": 1, "status": "Completed", "is_current_turn": false, "queue_order": 1, "seconds_spent": 120},
                {"user_id": 2, "status": "In_Progress", "is_current_turn": true, "queue_order": 2, "seconds_spent": 30,
                 "active_worklog_start_time": "2026-03-01T10:00:00"}
            ]
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.execution_mode, ExecutionMode::Sequential);
        assert_eq!(task.task_members.len(), 2);
        assert!(task.member(1).unwrap().is_completed());
        assert!(task.member(2).unwrap().is_current_turn);
        assert!(task.member(3).is_none());
        assert_eq!(task.total_seconds_spent(), 150);
        assert!(!task.is_revision);
    }

    #[test]
    fn test_execution_mode_defaults_to_parallel() {
        let task: Task =
            serde_json::from_str(r#"{"id": 1, "name": "t", "status": "Assigned"}"#).unwrap();
        assert_eq!(task.execution_mode, ExecutionMode::Parallel);
        assert!(task.task_members.is_empty());
    }
}

//! Listing-tab placement for requirements and tasks

use serde::{Deserialize, Serialize};

use crate::schemas::{ApprovalStatus, RequirementStatus, RequirementType, TaskStatus, UserRole};

/// Listing tab a record appears under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Draft,
    Pending,
    Active,
    Completed,
    Delayed,
    Archived,
}

impl Tab {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Draft => "draft",
            Tab::Pending => "pending",
            Tab::Active => "active",
            Tab::Completed => "completed",
            Tab::Delayed => "delayed",
            Tab::Archived => "archived",
        }
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requirement status as seen by tab placement, including the draft state
/// that lives outside the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    Draft,
    Workflow(RequirementStatus),
}

impl From<RequirementStatus> for ListingStatus {
    fn from(status: RequirementStatus) -> Self {
        ListingStatus::Workflow(status)
    }
}

/// Facts needed to place a requirement and resolve its actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequirementContext {
    /// Receiver has mapped the requirement into one of its workspaces
    pub is_workspace_mapped: bool,
    /// The sender (not the receiver) did the rejecting
    pub is_rejected_by_sender: bool,
    /// A quotation has been submitted
    pub has_quoted_price: bool,
    /// Approval state of in-house requirements
    pub approval_status: Option<ApprovalStatus>,
    /// Soft-deleted
    pub is_archived: bool,
}

/// Determine which tab a requirement belongs to.
///
/// Priority: archived, then Delayed/On_Hold, draft, Completed, then the
/// type-specific rules.
pub fn get_requirement_tab(
    status: ListingStatus,
    requirement_type: RequirementType,
    role: UserRole,
    context: &RequirementContext,
) -> Tab {
    if context.is_archived {
        return Tab::Archived;
    }

    let status = match status {
        ListingStatus::Draft => return Tab::Draft,
        ListingStatus::Workflow(RequirementStatus::Delayed | RequirementStatus::OnHold) => {
            return Tab::Delayed
        }
        ListingStatus::Workflow(RequirementStatus::Completed) => return Tab::Completed,
        ListingStatus::Workflow(status) => status,
    };

    match requirement_type {
        RequirementType::Outsourced => outsourced_tab(status, role, context),
        RequirementType::Inhouse | RequirementType::Client => inhouse_tab(context),
    }
}

fn outsourced_tab(status: RequirementStatus, role: UserRole, context: &RequirementContext) -> Tab {
    match status {
        RequirementStatus::Waiting | RequirementStatus::Submitted | RequirementStatus::Review => Tab::Pending,
        RequirementStatus::Assigned if !context.is_workspace_mapped => Tab::Pending,
        RequirementStatus::Rejected => rejected_tab(role, context),
        _ => Tab::Active,
    }
}

/// Sender sees a receiver-declined requirement as a draft to edit and resend;
/// every other rejected view is waiting on someone.
fn rejected_tab(role: UserRole, context: &RequirementContext) -> Tab {
    if role == UserRole::Sender && !context.is_rejected_by_sender {
        return Tab::Draft;
    }
    Tab::Pending
}

fn inhouse_tab(context: &RequirementContext) -> Tab {
    if context.approval_status == Some(ApprovalStatus::Pending) {
        return Tab::Pending;
    }
    Tab::Active
}

/// Determine which tab a task belongs to
pub fn get_task_tab(status: TaskStatus) -> Tab {
    match status {
        TaskStatus::Assigned | TaskStatus::Review => Tab::Pending,
        TaskStatus::InProgress => Tab::Active,
        TaskStatus::Stuck | TaskStatus::Impediment | TaskStatus::Delayed => Tab::Delayed,
        TaskStatus::Completed => Tab::Completed,
    }
}

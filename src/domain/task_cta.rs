//! Task CTA mapping

use serde::Serialize;

use crate::schemas::{ExecutionMode, TaskStatus};

use super::cta::{ActionConfig, ActionType, ApiAction, Icon};
use super::modal::ModalType;
use super::tabs::{get_task_tab, Tab};

use TaskStatus::*;

type Action = ActionConfig<TaskStatus>;

/// Viewer facts for task CTA determination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCtaContext {
    /// Task or requirement leader
    pub is_leader: bool,
    /// Assigned to this task
    pub is_member: bool,
    /// Holds the turn (sequential mode)
    pub is_current_turn: bool,
    pub execution_mode: ExecutionMode,
}

/// Complete CTA configuration for a task
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskCtaConfig {
    pub display_status: String,
    pub tab: Tab,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<Action>,
}

impl TaskCtaConfig {
    fn new(display_status: &str, tab: Tab) -> Self {
        TaskCtaConfig {
            display_status: display_status.to_string(),
            tab,
            primary_action: None,
            secondary_action: None,
        }
    }

    fn primary(mut self, action: Action) -> Self {
        self.primary_action = Some(action);
        self
    }

    fn secondary(mut self, action: Action) -> Self {
        self.secondary_action = Some(action);
        self
    }

    /// Descriptor for a status outside the known vocabulary
    pub fn neutral(raw_status: &str) -> Self {
        TaskCtaConfig::new(raw_status, Tab::Active)
    }

    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.primary_action.iter().chain(self.secondary_action.iter())
    }
}

fn action(label: &'static str, kind: ActionType, icon: Icon, api: ApiAction, next: TaskStatus) -> Action {
    ActionConfig::new(label, kind, icon, ModalType::None).api(api).moves_to(next)
}

/// Gets the CTA configuration for a task.
///
/// In sequential mode a member acts only on their turn; leaders review and
/// reopen regardless of turn.
pub fn get_task_cta_config(status: TaskStatus, context: &TaskCtaContext) -> TaskCtaConfig {
    let can_act = context.execution_mode == ExecutionMode::Parallel || context.is_current_turn;
    let acting_member = context.is_member && can_act;
    let tab = get_task_tab(status);

    match status {
        Assigned if acting_member => TaskCtaConfig::new("Ready to Start", tab)
            .primary(action("Start Work", ActionType::Primary, Icon::Play, ApiAction::StartWork, InProgress)),
        Assigned if context.is_member => TaskCtaConfig::new("Waiting for Turn", tab),
        Assigned => TaskCtaConfig::new("Assigned", tab),

        InProgress if acting_member => TaskCtaConfig::new("In Progress", tab)
            .primary(action("Submit for Review", ActionType::Primary, Icon::Send, ApiAction::SubmitReview, Review))
            .secondary(action("Mark Blocked", ActionType::Danger, Icon::Alert, ApiAction::MarkBlocked, Stuck)),
        InProgress if context.is_member => TaskCtaConfig::new("In Progress (Not Your Turn)", tab),
        InProgress => TaskCtaConfig::new("In Progress", tab),

        Review if context.is_leader => TaskCtaConfig::new("Awaiting Review", tab)
            .primary(action("Approve", ActionType::Primary, Icon::Check, ApiAction::Approve, Completed))
            .secondary(action(
                "Request Revision",
                ActionType::Danger,
                Icon::Undo,
                ApiAction::RequestRevision,
                InProgress,
            )),
        Review if acting_member => TaskCtaConfig::new("Submitted for Review", tab)
            .secondary(action("Pull Back", ActionType::Secondary, Icon::Undo, ApiAction::PullBack, InProgress)),
        Review => TaskCtaConfig::new("In Review", tab),

        Stuck if acting_member => TaskCtaConfig::new("Blocked (Internal)", tab)
            .primary(resume())
            .secondary(action("Escalate", ActionType::Danger, Icon::Flag, ApiAction::Escalate, Impediment)),
        Stuck => TaskCtaConfig::new("Blocked", tab),

        Impediment if acting_member => TaskCtaConfig::new("Blocked (External)", tab)
            .primary(resume())
            .secondary(action("De-escalate", ActionType::Secondary, Icon::Flag, ApiAction::Deescalate, Stuck)),
        Impediment => TaskCtaConfig::new("Impediment", tab),

        Delayed if acting_member => TaskCtaConfig::new("Delayed", tab).primary(resume()),
        Delayed => TaskCtaConfig::new("Delayed", tab),

        Completed if context.is_leader => TaskCtaConfig::new("Completed", tab)
            .secondary(action("Reopen", ActionType::Secondary, Icon::Refresh, ApiAction::Reopen, Review)),
        Completed => TaskCtaConfig::new("Completed", tab),
    }
}

/// String form of [`get_task_cta_config`]; unknown statuses are neutral.
pub fn get_task_cta_config_str(status: &str, context: &TaskCtaContext) -> TaskCtaConfig {
    match TaskStatus::canonicalize(status) {
        Some(status) => get_task_cta_config(status, context),
        None => {
            tracing::warn!("Unknown task status {:?}; showing neutral actions", status);
            TaskCtaConfig::neutral(status)
        }
    }
}

fn resume() -> Action {
    action("Resume Work", ActionType::Primary, Icon::Play, ApiAction::Resume, InProgress)
}

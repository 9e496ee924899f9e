//! Requirement CTA mapping
//!
//! Decides what a requirement panel shows from the status, the viewer's
//! role and a few context facts. Every action that moves the requirement
//! names its target status, which is always legal for that role in the
//! transition table.

use serde::Serialize;

use crate::schemas::{RequirementStatus, RequirementType, UserRole};

use super::cta::{ActionConfig, ActionType, ApiAction, Icon};
use super::modal::ModalType;
use super::requirement_workflow::effective_role;
use super::tabs::{get_requirement_tab, RequirementContext, Tab};

use RequirementStatus::*;

type Action = ActionConfig<RequirementStatus>;

/// Complete CTA configuration for a requirement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementCtaConfig {
    /// Human-readable status text
    pub display_status: String,
    /// Awaiting someone's action
    pub is_pending: bool,
    pub tab: Tab,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_action: Option<Action>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_action: Option<Action>,
}

impl RequirementCtaConfig {
    fn new(display_status: &str, is_pending: bool, tab: Tab) -> Self {
        RequirementCtaConfig {
            display_status: display_status.to_string(),
            is_pending,
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

    /// Descriptor for a status outside the known vocabulary: shown as-is,
    /// nothing to do.
    pub fn neutral(raw_status: &str) -> Self {
        RequirementCtaConfig::new(raw_status, false, Tab::Active)
    }

    /// Both actions, primary first
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.primary_action.iter().chain(self.secondary_action.iter())
    }
}

fn action(label: &'static str, kind: ActionType, icon: Icon, modal: ModalType) -> Action {
    ActionConfig::new(label, kind, icon, modal)
}

/// Gets the complete CTA configuration for a requirement.
///
/// The viewer's [`effective_role`] picks the flow, so every offered
/// `next_status` passes [`validate_transition`](super::validate_transition)
/// for the same viewer.
pub fn get_requirement_cta_config(
    status: RequirementStatus,
    role: UserRole,
    context: &RequirementContext,
    requirement_type: RequirementType,
) -> RequirementCtaConfig {
    match effective_role(role, requirement_type) {
        UserRole::Internal => {
            // the internal flow is always placed like an in-house requirement
            let tab = get_requirement_tab(status.into(), RequirementType::Inhouse, UserRole::Internal, context);
            internal_cta(status, tab)
        }
        UserRole::Sender => {
            let tab = get_requirement_tab(status.into(), requirement_type, role, context);
            sender_cta(status, context, tab)
        }
        UserRole::Receiver => {
            let tab = get_requirement_tab(status.into(), requirement_type, role, context);
            receiver_cta(status, context, tab)
        }
    }
}

/// String form of [`get_requirement_cta_config`].
///
/// Upstream data may carry statuses newer than this vocabulary; those get a
/// neutral descriptor instead of an error.
pub fn get_requirement_cta_config_str(
    status: &str,
    role: UserRole,
    context: &RequirementContext,
    requirement_type: RequirementType,
) -> RequirementCtaConfig {
    match RequirementStatus::canonicalize(status) {
        Some(status) => get_requirement_cta_config(status, role, context, requirement_type),
        None => {
            tracing::warn!("Unknown requirement status {:?}; showing neutral actions", status);
            RequirementCtaConfig::neutral(status)
        }
    }
}

fn sender_cta(status: RequirementStatus, context: &RequirementContext, tab: Tab) -> RequirementCtaConfig {
    match status {
        Waiting => RequirementCtaConfig::new("Awaiting Quote...", true, tab)
            .secondary(action("Cancel", ActionType::Danger, Icon::Close, ModalType::Reject).moves_to(Rejected)),
        Submitted => RequirementCtaConfig::new("Quote Received", true, tab)
            .primary(
                action("Accept Quote", ActionType::Primary, Icon::Check, ModalType::None)
                    .api(ApiAction::AcceptQuote)
                    .moves_to(Assigned)
                    .enabled(context.has_quoted_price),
            )
            .secondary(action("Reject Quote", ActionType::Danger, Icon::Close, ModalType::Reject).moves_to(Rejected)),
        Rejected if context.is_rejected_by_sender => {
            RequirementCtaConfig::new("Quote Rejected. Awaiting Revision...", true, tab)
        }
        Rejected => RequirementCtaConfig::new("Requirement Rejected", true, tab)
            .primary(action("Edit & Resend", ActionType::Primary, Icon::Edit, ModalType::Edit).moves_to(Waiting)),
        Assigned if !context.is_workspace_mapped => {
            RequirementCtaConfig::new("Waiting for Partner to Map Workspace...", true, tab)
        }
        Assigned => RequirementCtaConfig::new("Assigned", false, tab),
        InProgress => RequirementCtaConfig::new("Work In Progress...", false, tab).secondary(
            action("Pause", ActionType::Secondary, Icon::Pause, ModalType::None)
                .api(ApiAction::Pause)
                .moves_to(OnHold),
        ),
        Review => RequirementCtaConfig::new("Work Completed. Review Needed.", true, tab)
            .primary(
                action("Approve Work", ActionType::Primary, Icon::Check, ModalType::None)
                    .api(ApiAction::Approve)
                    .moves_to(Completed),
            )
            .secondary(
                action("Request Revision", ActionType::Danger, Icon::Undo, ModalType::Reject).moves_to(Revision),
            ),
        Revision => RequirementCtaConfig::new("Revision In Progress...", false, tab),
        Completed => RequirementCtaConfig::new("Completed", false, tab).secondary(
            action("Reopen", ActionType::Secondary, Icon::Refresh, ModalType::None)
                .api(ApiAction::Reopen)
                .moves_to(Revision),
        ),
        OnHold => RequirementCtaConfig::new("On Hold", false, tab).primary(resume("Resume")),
        Impediment => RequirementCtaConfig::new("Blocked (External)", false, tab),
        Stuck => RequirementCtaConfig::new("Blocked (Internal)", false, tab),
        Delayed => RequirementCtaConfig::new("Delayed", false, tab).primary(resume("Resume")),
    }
}

fn receiver_cta(status: RequirementStatus, context: &RequirementContext, tab: Tab) -> RequirementCtaConfig {
    match status {
        Waiting => RequirementCtaConfig::new("Action Needed: Submit Quote", true, tab)
            .primary(action("Submit Quote", ActionType::Primary, Icon::Send, ModalType::Quotation).moves_to(Submitted))
            .secondary(action("Decline", ActionType::Danger, Icon::Close, ModalType::Reject).moves_to(Rejected)),
        Submitted => RequirementCtaConfig::new("Quote Submitted. Pending Acceptance...", true, tab).secondary(
            action("Retract", ActionType::Secondary, Icon::Undo, ModalType::None)
                .api(ApiAction::Retract)
                .moves_to(Waiting),
        ),
        Rejected if context.is_rejected_by_sender => RequirementCtaConfig::new("Quote Rejected", true, tab).primary(
            action("Revise Quote", ActionType::Primary, Icon::Send, ModalType::Quotation).moves_to(Submitted),
        ),
        Rejected => RequirementCtaConfig::new("Requirement Declined. Awaiting Edit...", true, tab),
        Assigned if !context.is_workspace_mapped => {
            RequirementCtaConfig::new("Action Needed: Map Workspace", true, tab)
                .primary(action("Map Workspace", ActionType::Primary, Icon::Map, ModalType::Mapping))
        }
        Assigned => RequirementCtaConfig::new("Ready to Start", false, tab).primary(start_work()),
        InProgress => RequirementCtaConfig::new("Work In Progress", false, tab)
            .primary(submit_for_review())
            .secondary(mark_blocked()),
        Review => RequirementCtaConfig::new("Work Submitted. Pending Review...", true, tab).secondary(
            action("Pull Back", ActionType::Secondary, Icon::Undo, ModalType::None)
                .api(ApiAction::PullBack)
                .moves_to(InProgress),
        ),
        Revision => RequirementCtaConfig::new("Revision Requested", false, tab).primary(resubmit("Resubmit Work")),
        Completed => RequirementCtaConfig::new("Completed", false, tab),
        OnHold => RequirementCtaConfig::new("On Hold", false, tab).primary(resume("Resume Work")),
        Impediment => RequirementCtaConfig::new("Blocked (External)", false, tab).primary(resume("Resume Work")),
        Stuck => RequirementCtaConfig::new("Blocked (Internal)", false, tab).primary(resume("Resume Work")),
        Delayed => RequirementCtaConfig::new("Delayed", false, tab).primary(resume("Resume Work")),
    }
}

fn internal_cta(status: RequirementStatus, tab: Tab) -> RequirementCtaConfig {
    match status {
        // quote states should not occur in-house
        Waiting | Submitted => RequirementCtaConfig::new("Pending Assignment", true, tab),
        Assigned => RequirementCtaConfig::new("Ready to Start", false, tab).primary(start_work()),
        InProgress => RequirementCtaConfig::new("In Progress", false, tab)
            .primary(submit_for_review())
            .secondary(mark_blocked()),
        Review => RequirementCtaConfig::new("Awaiting Review", true, tab)
            .primary(
                action("Approve", ActionType::Primary, Icon::Check, ModalType::None)
                    .api(ApiAction::Approve)
                    .moves_to(Completed),
            )
            .secondary(
                action("Request Revision", ActionType::Danger, Icon::Undo, ModalType::Reject).moves_to(Revision),
            ),
        Revision => RequirementCtaConfig::new("Revision Requested", false, tab).primary(resubmit("Resubmit")),
        Rejected => RequirementCtaConfig::new("Rejected", false, tab).primary(
            action("Restart", ActionType::Primary, Icon::Refresh, ModalType::None)
                .api(ApiAction::Restart)
                .moves_to(Assigned),
        ),
        Completed => RequirementCtaConfig::new("Completed", false, tab).secondary(
            action("Reopen", ActionType::Secondary, Icon::Refresh, ModalType::None)
                .api(ApiAction::Reopen)
                .moves_to(Revision),
        ),
        OnHold => RequirementCtaConfig::new("On Hold", false, tab).primary(resume("Resume")),
        Impediment => RequirementCtaConfig::new("Blocked (External)", false, tab).primary(resume("Resume")),
        Stuck => RequirementCtaConfig::new("Blocked (Internal)", false, tab).primary(resume("Resume")),
        Delayed => RequirementCtaConfig::new("Delayed", false, tab).primary(resume("Resume")),
    }
}

fn start_work() -> Action {
    action("Start Work", ActionType::Primary, Icon::Play, ModalType::None)
        .api(ApiAction::StartWork)
        .moves_to(InProgress)
}

fn submit_for_review() -> Action {
    action("Submit for Review", ActionType::Primary, Icon::Send, ModalType::None)
        .api(ApiAction::SubmitReview)
        .moves_to(Review)
}

fn mark_blocked() -> Action {
    action("Mark Blocked", ActionType::Danger, Icon::Alert, ModalType::None)
        .api(ApiAction::MarkBlocked)
        .moves_to(Stuck)
}

fn resubmit(label: &'static str) -> Action {
    action(label, ActionType::Primary, Icon::Send, ModalType::None)
        .api(ApiAction::Resubmit)
        .moves_to(Review)
}

fn resume(label: &'static str) -> Action {
    action(label, ActionType::Primary, Icon::Play, ModalType::None)
        .api(ApiAction::Resume)
        .moves_to(InProgress)
}

//! Shared call-to-action descriptor types
//!
//! A CTA descriptor tells a button or panel what to render for a record:
//! label, visual weight, icon, which modal to open, which API action to
//! call, whether it is enabled, and the status the action requests.

use serde::Serialize;

use super::modal::ModalType;

/// Visual weight of an action button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Primary,
    Secondary,
    Danger,
    Info,
}

/// Icon shown next to an action label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Play,
    Check,
    ArrowRight,
    Lock,
    Pause,
    Send,
    Close,
    Edit,
    Map,
    Undo,
    Refresh,
    Alert,
    Flag,
}

/// API action a button triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiAction {
    AcceptQuote,
    Approve,
    Deescalate,
    Escalate,
    MarkBlocked,
    Pause,
    PullBack,
    Reopen,
    RequestRevision,
    Restart,
    Resubmit,
    Resume,
    Retract,
    StartWork,
    SubmitReview,
}

/// One action button
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionConfig<S> {
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: ActionType,
    pub icon: Icon,
    pub modal: ModalType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_action: Option<ApiAction>,
    pub enabled: bool,
    /// Status the action requests; None when the action does not move the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_status: Option<S>,
}

impl<S> ActionConfig<S> {
    /// An enabled action
    pub fn new(label: &'static str, kind: ActionType, icon: Icon, modal: ModalType) -> Self {
        ActionConfig {
            label,
            kind,
            icon,
            modal,
            api_action: None,
            enabled: true,
            next_status: None,
        }
    }

    pub fn api(mut self, api_action: ApiAction) -> Self {
        self.api_action = Some(api_action);
        self
    }

    pub fn moves_to(mut self, status: S) -> Self {
        self.next_status = Some(status);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

//! Domain logic for requirement and task workflows

pub mod assignment;
pub mod cta;
pub mod modal;
pub mod requirement_cta;
mod requirement_workflow;
pub mod rollup;
mod tabs;
pub mod task_cta;
mod task_workflow;
mod transitions;
mod validation;


pub use assignment::{
    current_turn_holder, next_turn_holder, ordered_members, resolve_member_action, MemberAction,
    TurnDecision, TurnRequest,
};
pub use cta::{ActionConfig, ActionType, ApiAction, Icon};
pub use modal::{ModalContext, ModalFieldConfig, ModalType};
pub use requirement_cta::{get_requirement_cta_config, get_requirement_cta_config_str, RequirementCtaConfig};
pub use requirement_workflow::{
    effective_role, get_allowed_transitions, is_terminal_status, is_transition_valid,
    is_transition_valid_str,
};
pub use rollup::{aggregate_member_statuses, derive_requirement_status_from_tasks};
pub use tabs::{get_requirement_tab, get_task_tab, ListingStatus, RequirementContext, Tab};
pub use task_cta::{get_task_cta_config, get_task_cta_config_str, TaskCtaConfig, TaskCtaContext};
pub use task_workflow::{get_allowed_task_transitions, is_task_transition_valid, is_task_transition_valid_str};
pub use transitions::{apply_requirement_transition, TransitionResult};
pub use validation::{
    can_enter_rejected, can_enter_submitted, validate_quotation, validate_rejection_reason,
    validate_transition, TransitionPayload, ValidationResult,
};

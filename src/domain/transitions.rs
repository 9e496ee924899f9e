//! State transition logic
//!
//! Pure functions for applying state transitions to requirements.

use crate::schemas::{Requirement, RequirementStatus, UserRole};

use super::validation::{validate_transition, TransitionPayload};

/// Result of a state transition attempt
#[derive(Debug)]
pub enum TransitionResult {
    /// Successful transition with the new requirement state
    Success {
        /// The requirement with updated status and timestamp
        next: Requirement,
    },
    /// Failed transition with error message
    Error {
        /// Description of why the transition failed
        error: String,
    },
}

impl TransitionResult {
    /// Check if the transition was successful
    pub fn is_success(&self) -> bool {
        matches!(self, TransitionResult::Success { .. })
    }

    /// Check if the transition failed
    pub fn is_error(&self) -> bool {
        matches!(self, TransitionResult::Error { .. })
    }

    /// Get the next requirement if the transition was successful
    pub fn requirement(self) -> Option<Requirement> {
        match self {
            TransitionResult::Success { next } => Some(next),
            TransitionResult::Error { .. } => None,
        }
    }

    /// Get the error message if the transition failed
    pub fn error(self) -> Option<String> {
        match self {
            TransitionResult::Success { .. } => None,
            TransitionResult::Error { error } => Some(error),
        }
    }
}

/// Apply a status transition to a requirement.
///
/// Never mutates the input. On success the returned requirement carries:
/// - the submitted quotation when moving to Submitted;
/// - no quotation when moving back to Waiting;
/// - the rejection reason only while Rejected.
///
/// Success here is optimistic; the backend confirms or rejects the mutation.
pub fn apply_requirement_transition(
    requirement: &Requirement,
    to: RequirementStatus,
    role: UserRole,
    payload: &TransitionPayload,
) -> TransitionResult {
    let validation = validate_transition(requirement, to, role, payload);
    if !validation.valid {
        return TransitionResult::Error {
            error: validation
                .reason
                .unwrap_or_else(|| "Transition validation failed".to_string()),
        };
    }

    let mut next = requirement.clone().with_status(to);

    match (to, payload) {
        (RequirementStatus::Submitted, TransitionPayload::Quotation(quotation)) => {
            next = next.with_quotation(Some(quotation.clone()));
        }
        (RequirementStatus::Waiting, _) => {
            next = next.with_quotation(None);
        }
        _ => {}
    }

    next = match (to, payload) {
        (RequirementStatus::Rejected, TransitionPayload::Rejection { reason }) => {
            next.with_rejection_reason(Some(reason.trim().to_string()))
        }
        _ => next.with_rejection_reason(None),
    };

    tracing::debug!(
        "Requirement {} moved {} -> {} by {}",
        requirement.id,
        requirement.status,
        to,
        role
    );

    TransitionResult::Success { next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::{PricingModel, Quotation};

    fn make_requirement(status: RequirementStatus) -> Requirement {
        Requirement::new(1, "Brand refresh")
            .with_pricing_model(PricingModel::Project)
            .with_status(status)
    }

    fn project_quote() -> TransitionPayload {
        TransitionPayload::Quotation(Quotation::Project {
            quoted_price: 2500.0,
            currency: "EUR".to_string(),
        })
    }

    fn rejection(reason: &str) -> TransitionPayload {
        TransitionPayload::Rejection {
            reason: reason.to_string(),
        }
    }

    #[test]
    fn test_submit_quotation_attaches_quote() {
        let req = make_requirement(RequirementStatus::Waiting);
        let result = apply_requirement_transition(&req, RequirementStatus::Submitted, UserRole::Receiver, &project_quote());
        assert!(result.is_success());

        let next = result.requirement().unwrap();
        assert_eq!(next.status, RequirementStatus::Submitted);
        assert_eq!(next.quotation.as_ref().unwrap().total_cost(), 2500.0);
    }

    #[test]
    fn test_submit_without_quotation_fails() {
        let req = make_requirement(RequirementStatus::Waiting);
        let result = apply_requirement_transition(&req, RequirementStatus::Submitted, UserRole::Receiver, &TransitionPayload::None);
        assert!(result.is_error());
        assert!(result.error().unwrap().contains("quotation"));
    }

    #[test]
    fn test_accept_quote_keeps_quotation() {
        let req = make_requirement(RequirementStatus::Waiting);
        let submitted = apply_requirement_transition(&req, RequirementStatus::Submitted, UserRole::Receiver, &project_quote())
            .requirement()
            .unwrap();
        let accepted = apply_requirement_transition(&submitted, RequirementStatus::Assigned, UserRole::Sender, &TransitionPayload::None)
            .requirement()
            .unwrap();
        assert_eq!(accepted.status, RequirementStatus::Assigned);
        assert!(accepted.has_quoted_price());
    }

    #[test]
    fn test_rejection_reason_only_while_rejected() {
        let req = make_requirement(RequirementStatus::Submitted)
            .with_quotation(Some(Quotation::Project {
                quoted_price: 10.0,
                currency: "USD".to_string(),
            }));
        let rejected = apply_requirement_transition(
            &req,
            RequirementStatus::Rejected,
            UserRole::Sender,
            &rejection("  Price is above our budget  "),
        )
        .requirement()
        .unwrap();
        assert_eq!(rejected.rejection_reason.as_deref(), Some("Price is above our budget"));

        let revised = apply_requirement_transition(&rejected, RequirementStatus::Submitted, UserRole::Receiver, &project_quote())
            .requirement()
            .unwrap();
        assert!(revised.rejection_reason.is_none());
        assert_eq!(revised.quotation.as_ref().unwrap().currency(), "EUR");
    }

    #[test]
    fn test_reject_without_reason_fails() {
        let req = make_requirement(RequirementStatus::Waiting);
        let result = apply_requirement_transition(&req, RequirementStatus::Rejected, UserRole::Receiver, &TransitionPayload::None);
        assert!(result.is_error());
    }

    #[test]
    fn test_retract_clears_quotation() {
        let req = make_requirement(RequirementStatus::Waiting);
        let submitted = apply_requirement_transition(&req, RequirementStatus::Submitted, UserRole::Receiver, &project_quote())
            .requirement()
            .unwrap();
        let retracted = apply_requirement_transition(&submitted, RequirementStatus::Waiting, UserRole::Receiver, &TransitionPayload::None)
            .requirement()
            .unwrap();
        assert_eq!(retracted.status, RequirementStatus::Waiting);
        assert!(retracted.quotation.is_none());
    }

    #[test]
    fn test_role_not_allowed() {
        let req = make_requirement(RequirementStatus::Review);
        let result = apply_requirement_transition(&req, RequirementStatus::Completed, UserRole::Receiver, &TransitionPayload::None);
        assert!(result.is_error());
        assert!(!result.is_success());
    }

    #[test]
    fn test_transition_does_not_mutate_original() {
        let req = make_requirement(RequirementStatus::Waiting);
        let original = req.clone();
        let _ = apply_requirement_transition(&req, RequirementStatus::Submitted, UserRole::Receiver, &project_quote());
        assert_eq!(req, original);
    }
}

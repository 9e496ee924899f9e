//! Validation rules for requirement transitions

use crate::schemas::{PricingModel, Quotation, Requirement, RequirementStatus, UserRole};

use super::modal::{
    get_quotation_modal_config, get_reject_modal_config, validate_field, FieldValue, RejectAction,
};
use super::requirement_workflow::{effective_role, is_transition_valid};

/// Data that accompanies a transition request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransitionPayload {
    /// Plain status change
    #[default]
    None,
    /// Submitting (or revising) a quotation
    Quotation(Quotation),
    /// Rejecting with a reason
    Rejection { reason: String },
}

/// Result of a validation check
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the validation passed
    pub valid: bool,

    /// Reason for failure (if valid is false)
    pub reason: Option<String>,
}

impl ValidationResult {
    /// Create a successful validation result
    pub fn success() -> Self {
        ValidationResult {
            valid: true,
            reason: None,
        }
    }

    /// Create a failed validation result
    pub fn failure(reason: impl Into<String>) -> Self {
        ValidationResult {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validate a quotation against the requirement's pricing model and the
/// quotation form rules.
pub fn validate_quotation(quotation: &Quotation, pricing_model: PricingModel) -> ValidationResult {
    if quotation.pricing_model() != pricing_model {
        return ValidationResult::failure(format!(
            "quotation is {:?} but requirement is priced {:?}",
            quotation.pricing_model(),
            pricing_model
        ));
    }

    let config = get_quotation_modal_config(pricing_model);
    for field in &config.fields {
        let value = match (field.name, quotation) {
            ("hourly_rate", Quotation::Hourly { hourly_rate, .. }) => Some(FieldValue::Number(*hourly_rate)),
            ("estimated_hours", Quotation::Hourly { estimated_hours, .. }) => {
                Some(FieldValue::Number(*estimated_hours))
            }
            ("quoted_price", Quotation::Project { quoted_price, .. }) => Some(FieldValue::Number(*quoted_price)),
            ("currency", quote) => Some(FieldValue::Text(quote.currency())),
            _ => None,
        };
        if let Some(message) = validate_field(field, value) {
            return ValidationResult::failure(message);
        }
    }

    ValidationResult::success()
}

/// Validate a rejection reason against the reject form rules
pub fn validate_rejection_reason(reason: &str) -> ValidationResult {
    let config = get_reject_modal_config(RejectAction::Decline);
    let message = config
        .field("rejection_reason")
        .and_then(|field| validate_field(field, Some(FieldValue::Text(reason.trim()))));
    match message {
        Some(message) => ValidationResult::failure(message),
        None => ValidationResult::success(),
    }
}

/// Validate entering the "Submitted" state
pub fn can_enter_submitted(requirement: &Requirement, payload: &TransitionPayload) -> ValidationResult {
    match payload {
        TransitionPayload::Quotation(quotation) => validate_quotation(quotation, requirement.pricing_model),
        _ => ValidationResult::failure("submitting requires a quotation"),
    }
}

/// Validate entering the "Rejected" state
pub fn can_enter_rejected(payload: &TransitionPayload) -> ValidationResult {
    match payload {
        TransitionPayload::Rejection { reason } => validate_rejection_reason(reason),
        _ => ValidationResult::failure("rejecting requires a reason"),
    }
}

/// Validate a transition of a requirement to `to` by `role`.
///
/// Checks the transition table of the role's [`effective_role`] for this
/// requirement type first, then the payload the target
/// state requires. A payload that does not belong to the target state is
/// rejected so a quotation or reason cannot be attached out of band.
pub fn validate_transition(
    requirement: &Requirement,
    to: RequirementStatus,
    role: UserRole,
    payload: &TransitionPayload,
) -> ValidationResult {
    let from = requirement.status;
    if !is_transition_valid(from, to, effective_role(role, requirement.requirement_type)) {
        return ValidationResult::failure(format!("{} cannot move a requirement from {} to {}", role, from, to));
    }

    match to {
        RequirementStatus::Submitted => can_enter_submitted(requirement, payload),
        RequirementStatus::Rejected => can_enter_rejected(payload),
        _ => match payload {
            TransitionPayload::None => ValidationResult::success(),
            TransitionPayload::Quotation(_) => {
                ValidationResult::failure(format!("a quotation cannot accompany a move to {}", to))
            }
            TransitionPayload::Rejection { .. } => {
                ValidationResult::failure(format!("a rejection reason cannot accompany a move to {}", to))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::RequirementType;

    fn hourly_quote(rate: f64) -> Quotation {
        Quotation::Hourly {
            hourly_rate: rate,
            estimated_hours: 8.0,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_quotation_must_match_pricing_model() {
        let result = validate_quotation(&hourly_quote(20.0), PricingModel::Project);
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("priced"));
        assert!(validate_quotation(&hourly_quote(20.0), PricingModel::Hourly).valid);
    }

    #[test]
    fn test_quotation_rejects_negative_amounts() {
        let result = validate_quotation(&hourly_quote(-5.0), PricingModel::Hourly);
        assert!(!result.valid);
        assert_eq!(result.reason.unwrap(), "Hourly Rate must be at least 0");
    }

    #[test]
    fn test_quotation_requires_currency() {
        let quote = Quotation::Project {
            quoted_price: 100.0,
            currency: String::new(),
        };
        let result = validate_quotation(&quote, PricingModel::Project);
        assert_eq!(result.reason.unwrap(), "Currency is required");
    }

    #[test]
    fn test_rejection_reason_rules() {
        assert!(!validate_rejection_reason("   ").valid);
        assert!(!validate_rejection_reason("too short").valid);
        assert!(validate_rejection_reason("Scope does not fit our team").valid);
    }

    #[test]
    fn test_validate_transition_checks_table_first() {
        let req = Requirement::new(1, "Req");
        let result = validate_transition(&req, RequirementStatus::Completed, UserRole::Receiver, &TransitionPayload::None);
        assert!(!result.valid);
        assert!(result.reason.unwrap().contains("cannot move"));
    }

    #[test]
    fn test_inhouse_requirement_uses_internal_table_for_any_role() {
        let req = Requirement::new(1, "Req")
            .with_type(RequirementType::Inhouse)
            .with_status(RequirementStatus::InProgress);
        for role in [UserRole::Sender, UserRole::Receiver, UserRole::Internal] {
            assert!(validate_transition(&req, RequirementStatus::Review, role, &TransitionPayload::None).valid);
        }
        // the quote flow does not exist in-house
        let waiting = req.clone().with_status(RequirementStatus::Waiting);
        let result = validate_transition(&waiting, RequirementStatus::Rejected, UserRole::Sender, &TransitionPayload::None);
        assert!(result.reason.unwrap().contains("cannot move"));
    }

    #[test]
    fn test_validate_transition_rejects_stray_payload() {
        let req = Requirement::new(1, "Req").with_status(RequirementStatus::Submitted);
        let result = validate_transition(
            &req,
            RequirementStatus::Assigned,
            UserRole::Sender,
            &TransitionPayload::Quotation(hourly_quote(10.0)),
        );
        assert!(!result.valid);
    }
}

//! Requirement workflow state machine
//!
//! Legal status transitions for requirements, per role. The backend is the
//! final authority; these tables are the client-side mirror every
//! state-changing action consults before issuing a mutation.
//!
//! Quote flow: Waiting → Submitted → Assigned (or Rejected)
//! Work flow: Assigned → In_Progress → Review → Completed (or Revision)

use crate::schemas::{RequirementStatus, RequirementType, UserRole};

use RequirementStatus::*;

/// Transitions for in-house requirements (sender and receiver are the same company).
pub fn internal_transitions(from: RequirementStatus) -> &'static [RequirementStatus] {
    match from {
        Assigned => &[InProgress, OnHold, Delayed],
        InProgress => &[Review, Completed, Impediment, Stuck, OnHold, Delayed],
        Review => &[Assigned, Completed, Revision],
        Revision => &[InProgress, Review],
        OnHold => &[InProgress, Assigned],
        Delayed => &[InProgress, Assigned, OnHold],
        Impediment => &[InProgress],
        Stuck => &[InProgress],
        Completed => &[Revision, Assigned],
        Rejected => &[Assigned],
        // quote states should not occur in-house; allow recovery
        Waiting => &[Assigned],
        Submitted => &[Review, Assigned],
    }
}

/// Transitions for the sender (client company that created the requirement).
pub fn sender_transitions(from: RequirementStatus) -> &'static [RequirementStatus] {
    match from {
        Assigned => &[OnHold, InProgress, Delayed],
        Waiting => &[OnHold, Rejected, Delayed],
        // quote received: accept or reject
        Submitted => &[Assigned, Rejected],
        OnHold => &[InProgress, Assigned, Waiting],
        Delayed => &[InProgress, Assigned, Waiting, OnHold],
        InProgress => &[OnHold, Delayed],
        // work received: approve or request revision
        Review => &[Completed, Revision],
        Completed => &[Revision, Rejected],
        // edit and resend
        Rejected => &[Waiting],
        Revision | Impediment | Stuck => &[],
    }
}

/// Transitions for the receiver (vendor company working on the requirement).
pub fn receiver_transitions(from: RequirementStatus) -> &'static [RequirementStatus] {
    match from {
        // submit quote or decline
        Waiting => &[Submitted, Rejected],
        // revise a rejected quote
        Rejected => &[Submitted],
        Assigned => &[InProgress],
        InProgress => &[Review, Impediment, Stuck, OnHold, Delayed],
        Delayed => &[InProgress],
        Revision => &[Review, InProgress],
        Impediment => &[InProgress],
        Stuck => &[InProgress],
        OnHold => &[InProgress],
        // pull back from review
        Review => &[InProgress],
        // retract a submitted quote
        Submitted => &[Waiting],
        Completed => &[],
    }
}

/// Gets all allowed transitions from a status for a role.
///
/// An empty slice means the role cannot move the requirement from here.
pub fn get_allowed_transitions(from: RequirementStatus, role: UserRole) -> &'static [RequirementStatus] {
    match role {
        UserRole::Internal => internal_transitions(from),
        UserRole::Sender => sender_transitions(from),
        UserRole::Receiver => receiver_transitions(from),
    }
}

/// Role whose table governs a viewer of a requirement of this type.
///
/// Only outsourced requirements split into sender and receiver; in-house
/// and client requirements follow the internal table for everyone.
pub fn effective_role(role: UserRole, requirement_type: RequirementType) -> UserRole {
    match requirement_type {
        RequirementType::Outsourced => role,
        RequirementType::Inhouse | RequirementType::Client => UserRole::Internal,
    }
}

/// Checks if a status transition is valid for the given role.
pub fn is_transition_valid(from: RequirementStatus, to: RequirementStatus, role: UserRole) -> bool {
    get_allowed_transitions(from, role).contains(&to)
}

/// String form of [`is_transition_valid`] for data that has not been typed yet.
///
/// Unknown statuses or roles yield false.
pub fn is_transition_valid_str(from: &str, to: &str, role: &str) -> bool {
    let (Some(from), Some(to)) = (
        RequirementStatus::canonicalize(from),
        RequirementStatus::canonicalize(to),
    ) else {
        tracing::debug!("Transition lookup with unknown status: {} -> {}", from, to);
        return false;
    };
    match role.parse::<UserRole>() {
        Ok(role) => is_transition_valid(from, to, role),
        Err(_) => false,
    }
}

/// Check if a status is the terminal state of the work flow.
///
/// Completed requirements can still be reopened; no forward work remains.
pub fn is_terminal_status(status: RequirementStatus) -> bool {
    status == Completed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_role() {
        assert_eq!(effective_role(UserRole::Sender, RequirementType::Outsourced), UserRole::Sender);
        assert_eq!(effective_role(UserRole::Internal, RequirementType::Outsourced), UserRole::Internal);
        assert_eq!(effective_role(UserRole::Sender, RequirementType::Inhouse), UserRole::Internal);
        assert_eq!(effective_role(UserRole::Receiver, RequirementType::Client), UserRole::Internal);
    }

    #[test]
    fn test_receiver_quote_flow() {
        assert!(is_transition_valid(Waiting, Submitted, UserRole::Receiver));
        assert!(is_transition_valid(Waiting, Rejected, UserRole::Receiver));
        assert!(!is_transition_valid(Waiting, Completed, UserRole::Receiver));
        assert!(is_transition_valid(Rejected, Submitted, UserRole::Receiver));
    }

    #[test]
    fn test_sender_quote_flow() {
        assert!(is_transition_valid(Submitted, Assigned, UserRole::Sender));
        assert!(is_transition_valid(Submitted, Rejected, UserRole::Sender));
        assert!(!is_transition_valid(Waiting, Submitted, UserRole::Sender));
        assert!(is_transition_valid(Rejected, Waiting, UserRole::Sender));
    }

    #[test]
    fn test_sender_approves_work() {
        assert!(is_transition_valid(Review, Completed, UserRole::Sender));
        assert!(!is_transition_valid(Review, Completed, UserRole::Receiver));
    }

    #[test]
    fn test_get_allowed_transitions() {
        assert_eq!(get_allowed_transitions(Waiting, UserRole::Receiver), &[Submitted, Rejected]);
        assert_eq!(get_allowed_transitions(Review, UserRole::Sender), &[Completed, Revision]);
        assert!(get_allowed_transitions(Completed, UserRole::Receiver).is_empty());
        assert!(get_allowed_transitions(Stuck, UserRole::Sender).is_empty());
    }

    #[test]
    fn test_string_lookup_is_total() {
        assert!(is_transition_valid_str("Waiting", "Submitted", "receiver"));
        assert!(is_transition_valid_str("in progress", "review", "Receiver"));
        assert!(!is_transition_valid_str("Archived", "Waiting", "sender"));
        assert!(!is_transition_valid_str("Waiting", "Submitted", "auditor"));
        assert!(!is_transition_valid_str("", "", ""));
    }

    #[test]
    fn test_no_self_transitions() {
        for status in crate::schemas::REQUIREMENT_STATUSES {
            for role in [UserRole::Sender, UserRole::Receiver, UserRole::Internal] {
                assert!(!is_transition_valid(*status, *status, role), "{} -> {} for {}", status, status, role);
            }
        }
    }

    #[test]
    fn test_is_terminal_status() {
        assert!(is_terminal_status(Completed));
        assert!(!is_terminal_status(Review));
    }
}

//! Status string canonicalisation
//!
//! The backend and older UI code spell statuses several ways ("In_Progress",
//! "In Progress", "in-progress"). Every comparison of a raw status string goes
//! through [`canonical_status_key`].

/// Reduce a raw status string to its comparison key.
///
/// Lowercases, trims, and treats spaces and hyphens as underscores.
pub fn canonical_status_key(raw: &str) -> String {
    raw.trim().to_ascii_lowercase().replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_status_key() {
        assert_eq!(canonical_status_key("In_Progress"), "in_progress");
        assert_eq!(canonical_status_key("in progress"), "in_progress");
        assert_eq!(canonical_status_key("IN-PROGRESS"), "in_progress");
        assert_eq!(canonical_status_key("  Waiting "), "waiting");
        assert_eq!(canonical_status_key(""), "");
    }
}

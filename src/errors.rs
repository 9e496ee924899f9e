//! Error types for the alsonotify crate
//!
//! Each error type has a corresponding error code for programmatic handling.
//! Decision functions (transition tables, CTA resolution, turn model) never
//! fail; only operations touching storage, files or user input return these.

use thiserror::Error;

/// Result type alias for alsonotify operations
pub type Result<T> = std::result::Result<T, AlsoNotifyError>;

/// Main error type for all alsonotify operations
#[derive(Debug, Error)]
pub enum AlsoNotifyError {
    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Schema validation failed
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Workflow state transition rejected by the client-side table
    #[error("State transition error: {0}")]
    StateTransition(String),

    /// A status string outside the known vocabulary
    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error with context
    #[error("{context}: {message}")]
    Wrapped { context: String, message: String },
}

impl AlsoNotifyError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            AlsoNotifyError::InvalidJson(_) => "INVALID_JSON",
            AlsoNotifyError::SchemaValidation(_) => "SCHEMA_VALIDATION",
            AlsoNotifyError::FileNotFound(_) => "FILE_NOT_FOUND",
            AlsoNotifyError::ConfigError(_) => "CONFIG_ERROR",
            AlsoNotifyError::StateTransition(_) => "STATE_TRANSITION",
            AlsoNotifyError::UnknownStatus(_) => "UNKNOWN_STATUS",
            AlsoNotifyError::Storage(_) => "STORAGE_ERROR",
            AlsoNotifyError::Io(_) => "IO_ERROR",
            AlsoNotifyError::Wrapped { .. } => "WRAPPED_ERROR",
        }
    }

    /// Wrap an error with additional context
    pub fn wrap<E: std::fmt::Display>(error: E, context: impl Into<String>) -> Self {
        AlsoNotifyError::Wrapped {
            context: context.into(),
            message: error.to_string(),
        }
    }
}

/// Convert an error to an appropriate exit code
pub fn to_exit_code(error: &AlsoNotifyError) -> i32 {
    match error {
        AlsoNotifyError::StateTransition(_) | AlsoNotifyError::UnknownStatus(_) => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AlsoNotifyError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(AlsoNotifyError::SchemaValidation("test".into()).code(), "SCHEMA_VALIDATION");
        assert_eq!(AlsoNotifyError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(AlsoNotifyError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(AlsoNotifyError::StateTransition("test".into()).code(), "STATE_TRANSITION");
        assert_eq!(AlsoNotifyError::UnknownStatus("test".into()).code(), "UNKNOWN_STATUS");
        assert_eq!(AlsoNotifyError::Storage("test".into()).code(), "STORAGE_ERROR");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(to_exit_code(&AlsoNotifyError::StateTransition("test".into())), 2);
        assert_eq!(to_exit_code(&AlsoNotifyError::UnknownStatus("test".into())), 2);
        assert_eq!(to_exit_code(&AlsoNotifyError::Storage("test".into())), 1);
    }

    #[test]
    fn test_wrap_error() {
        let wrapped = AlsoNotifyError::wrap("inner error", "outer context");
        assert_eq!(wrapped.code(), "WRAPPED_ERROR");
        assert!(wrapped.to_string().contains("outer context"));
        assert!(wrapped.to_string().contains("inner error"));
    }
}

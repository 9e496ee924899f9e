//! AlsoNotify workflow core
//!
//! Client-side workflow rules for the AlsoNotify agency platform:
//! - Schema definitions for requirements, tasks, timers and settings
//! - Requirement and task status transition tables
//! - Call-to-action resolution and the sequential/parallel turn model
//! - Tab/URL synchronization and the cookie route guard
//! - Durable storage for the active timer and settings caches
//! - Formatting helpers

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod format;
pub mod fs;
pub mod schemas;
pub mod storage;
pub mod web;

// Re-export commonly used types
pub use errors::{AlsoNotifyError, Result};
pub use schemas::{Config, Requirement, RequirementStatus, Task, TaskMember, TaskStatus, UserRole};

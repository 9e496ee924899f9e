//! Schema types for alsonotify
//!
//! Records mirror the JSON shapes returned by the AlsoNotify backend and the
//! records kept in durable client storage.

mod config;
mod requirement;
mod settings;
mod status;
mod task;
mod timer;

pub use config::Config;
pub use requirement::{
    ApprovalStatus, Priority, PricingModel, Quotation, Requirement, RequirementStatus,
    RequirementType, UserRole, REQUIREMENT_STATUSES,
};
pub use settings::{
    default_document_types, default_invoice_presets, DocumentTypeSetting, InvoicePaymentPreset,
};
pub use status::canonical_status_key;
pub use task::{ExecutionMode, MemberStatus, Task, TaskMember, TaskRole, TaskStatus, TASK_STATUSES};
pub use timer::ActiveTimerState;

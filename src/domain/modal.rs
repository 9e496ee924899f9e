//! Modal field configurations for requirement workflow actions
//!
//! Field names use snake_case to match the backend update payload.

use serde::Serialize;

use crate::schemas::PricingModel;

/// Which modal dialog an action opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalType {
    /// Submit or review a price quote
    Quotation,
    /// Reject a requirement or quote with a reason
    Reject,
    /// Map a requirement to a workspace
    Mapping,
    /// Edit requirement details
    Edit,
    /// Direct API action, no modal
    None,
}

/// Input types supported in modal forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Select,
    Textarea,
    Currency,
}

/// Context consulted by conditional fields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalContext {
    pub pricing_model: Option<PricingModel>,
    pub has_existing_quote: bool,
}

/// Validation rules for a field
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FieldValidation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Definition of a single form field
#[derive(Debug, Clone, Serialize)]
pub struct FieldDefinition {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    /// Field is shown only when this returns true
    #[serde(skip)]
    pub condition: Option<fn(&ModalContext) -> bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<FieldValidation>,
}

impl FieldDefinition {
    fn applies_to(&self, context: &ModalContext) -> bool {
        self.condition.map_or(true, |condition| condition(context))
    }
}

/// Complete modal configuration
#[derive(Debug, Clone, Serialize)]
pub struct ModalFieldConfig {
    pub title: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldDefinition>,
    pub requires_reason: bool,
}

impl ModalFieldConfig {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Rejection flavours sharing the reject modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectAction {
    Decline,
    RejectQuote,
    RequestRevision,
}

/// A value entered into a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

fn is_hourly(ctx: &ModalContext) -> bool {
    ctx.pricing_model == Some(PricingModel::Hourly)
}

fn is_project(ctx: &ModalContext) -> bool {
    ctx.pricing_model == Some(PricingModel::Project)
}

const NON_NEGATIVE: FieldValidation = FieldValidation {
    min: Some(0.0),
    max: None,
    min_length: None,
    max_length: None,
};

const fn length(min_length: Option<usize>, max_length: usize) -> FieldValidation {
    FieldValidation {
        min: None,
        max: None,
        min_length,
        max_length: Some(max_length),
    }
}

fn quotation_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition {
            name: "hourly_rate",
            field_type: FieldType::Number,
            label: "Hourly Rate",
            required: true,
            placeholder: Some("Enter hourly rate"),
            condition: Some(is_hourly),
            validation: Some(NON_NEGATIVE),
        },
        FieldDefinition {
            name: "estimated_hours",
            field_type: FieldType::Number,
            label: "Estimated Hours",
            required: true,
            placeholder: Some("Enter estimated hours"),
            condition: Some(is_hourly),
            validation: Some(NON_NEGATIVE),
        },
        FieldDefinition {
            name: "quoted_price",
            field_type: FieldType::Number,
            label: "Total Project Cost",
            required: true,
            placeholder: Some("Enter total project cost"),
            condition: Some(is_project),
            validation: Some(NON_NEGATIVE),
        },
        FieldDefinition {
            name: "currency",
            field_type: FieldType::Currency,
            label: "Currency",
            required: true,
            placeholder: Some("Select currency"),
            condition: None,
            validation: None,
        },
        FieldDefinition {
            name: "notes",
            field_type: FieldType::Textarea,
            label: "Notes (Optional)",
            required: false,
            placeholder: Some("Add any additional notes or terms"),
            condition: None,
            validation: Some(length(None, 1000)),
        },
    ]
}

/// Quotation modal; rate and hours for hourly pricing, a total for project pricing.
pub fn get_quotation_modal_config(pricing_model: PricingModel) -> ModalFieldConfig {
    let context = ModalContext {
        pricing_model: Some(pricing_model),
        has_existing_quote: false,
    };
    ModalFieldConfig {
        title: "Submit Quotation",
        submit_label: "Submit Quote",
        fields: filter_fields_by_context(quotation_fields(), &context),
        requires_reason: false,
    }
}

/// Reject modal; the title and submit label depend on the rejection flavour.
pub fn get_reject_modal_config(action: RejectAction) -> ModalFieldConfig {
    let (title, submit_label) = match action {
        RejectAction::Decline => ("Decline Requirement", "Decline"),
        RejectAction::RejectQuote => ("Reject Quote", "Reject"),
        RejectAction::RequestRevision => ("Request Revision", "Request Revision"),
    };
    ModalFieldConfig {
        title,
        submit_label,
        fields: vec![FieldDefinition {
            name: "rejection_reason",
            field_type: FieldType::Textarea,
            label: "Reason",
            required: true,
            placeholder: Some("Please provide a reason for this action"),
            condition: None,
            validation: Some(length(Some(10), 1000)),
        }],
        requires_reason: true,
    }
}

/// Workspace mapping modal shown to a receiver of an outsourced requirement
pub fn get_mapping_modal_config() -> ModalFieldConfig {
    ModalFieldConfig {
        title: "Map to Workspace",
        submit_label: "Map Workspace",
        fields: vec![FieldDefinition {
            name: "receiver_workspace_id",
            field_type: FieldType::Select,
            label: "Select Workspace",
            required: true,
            placeholder: Some("Choose a workspace"),
            condition: None,
            validation: None,
        }],
        requires_reason: false,
    }
}

/// Edit modal used when a sender edits and resends a rejected requirement
pub fn get_edit_modal_config() -> ModalFieldConfig {
    ModalFieldConfig {
        title: "Edit Requirement",
        submit_label: "Save & Resend",
        fields: vec![
            FieldDefinition {
                name: "title",
                field_type: FieldType::Text,
                label: "Title",
                required: true,
                placeholder: Some("Requirement title"),
                condition: None,
                validation: Some(length(Some(3), 200)),
            },
            FieldDefinition {
                name: "description",
                field_type: FieldType::Textarea,
                label: "Description",
                required: true,
                placeholder: Some("Describe the requirement"),
                condition: None,
                validation: Some(length(Some(10), 5000)),
            },
        ],
        requires_reason: false,
    }
}

/// Keep the fields whose condition holds for the context
pub fn filter_fields_by_context(
    fields: Vec<FieldDefinition>,
    context: &ModalContext,
) -> Vec<FieldDefinition> {
    fields.into_iter().filter(|f| f.applies_to(context)).collect()
}

/// Validate a value against a field's rules.
///
/// Returns the first violation as a human-readable message, or None.
pub fn validate_field(field: &FieldDefinition, value: Option<FieldValue<'_>>) -> Option<String> {
    let value = match value {
        None | Some(FieldValue::Text("")) => {
            if field.required {
                return Some(format!("{} is required", field.label));
            }
            return None;
        }
        Some(value) => value,
    };

    let rules = field.validation?;

    match value {
        FieldValue::Number(n) => {
            if let Some(min) = rules.min {
                if n < min {
                    return Some(format!("{} must be at least {}", field.label, min));
                }
            }
            if let Some(max) = rules.max {
                if n > max {
                    return Some(format!("{} must be at most {}", field.label, max));
                }
            }
        }
        FieldValue::Text(text) => {
            let len = text.chars().count();
            if let Some(min_length) = rules.min_length {
                if len < min_length {
                    return Some(format!("{} must be at least {} characters", field.label, min_length));
                }
            }
            if let Some(max_length) = rules.max_length {
                if len > max_length {
                    return Some(format!("{} must be at most {} characters", field.label, max_length));
                }
            }
        }
    }

    None
}

//! Requirement schema - a unit of client work

use serde::{Deserialize, Serialize};

use crate::errors::AlsoNotifyError;

use super::status::canonical_status_key;

/// Workflow status of a requirement.
///
/// Serialised exactly as the backend enum (`In_Progress`, `On_Hold`, ...).
/// Deserialisation accepts any spelling that canonicalises to a known value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequirementStatus {
    Assigned,
    InProgress,
    OnHold,
    Submitted,
    Completed,
    Waiting,
    Rejected,
    Review,
    Revision,
    Impediment,
    Stuck,
    Delayed,
}

/// Every requirement status, in backend enum order.
pub const REQUIREMENT_STATUSES: &[RequirementStatus] = &[
    RequirementStatus::Assigned,
    RequirementStatus::InProgress,
    RequirementStatus::OnHold,
    RequirementStatus::Submitted,
    RequirementStatus::Completed,
    RequirementStatus::Waiting,
    RequirementStatus::Rejected,
    RequirementStatus::Review,
    RequirementStatus::Revision,
    RequirementStatus::Impediment,
    RequirementStatus::Stuck,
    RequirementStatus::Delayed,
];

impl RequirementStatus {
    /// Backend spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementStatus::Assigned => "Assigned",
            RequirementStatus::InProgress => "In_Progress",
            RequirementStatus::OnHold => "On_Hold",
            RequirementStatus::Submitted => "Submitted",
            RequirementStatus::Completed => "Completed",
            RequirementStatus::Waiting => "Waiting",
            RequirementStatus::Rejected => "Rejected",
            RequirementStatus::Review => "Review",
            RequirementStatus::Revision => "Revision",
            RequirementStatus::Impediment => "Impediment",
            RequirementStatus::Stuck => "Stuck",
            RequirementStatus::Delayed => "Delayed",
        }
    }

    /// Map any spelling of a status onto the vocabulary.
    ///
    /// Returns None for strings outside the vocabulary.
    pub fn canonicalize(raw: &str) -> Option<Self> {
        let key = canonical_status_key(raw);
        REQUIREMENT_STATUSES
            .iter()
            .copied()
            .find(|status| canonical_status_key(status.as_str()) == key)
    }
}

impl std::fmt::Display for RequirementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequirementStatus {
    type Err = AlsoNotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequirementStatus::canonicalize(s).ok_or_else(|| AlsoNotifyError::UnknownStatus(s.to_string()))
    }
}

impl TryFrom<String> for RequirementStatus {
    type Error = AlsoNotifyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RequirementStatus> for String {
    fn from(status: RequirementStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Role of the viewing user relative to a requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Company that created and sent the requirement (client)
    Sender,
    /// Company that receives and works on the requirement (vendor/partner)
    Receiver,
    /// In-house requirement where sender and receiver are the same company
    Internal,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Sender => write!(f, "sender"),
            UserRole::Receiver => write!(f, "receiver"),
            UserRole::Internal => write!(f, "internal"),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sender" => Ok(UserRole::Sender),
            "receiver" => Ok(UserRole::Receiver),
            "internal" => Ok(UserRole::Internal),
            _ => Err(format!("Unknown user role: {}", s)),
        }
    }
}

/// Requirement type - determines the workflow path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequirementType {
    /// Cross-company collaboration (sender/receiver)
    #[default]
    Outsourced,
    /// Internal team workflow
    Inhouse,
    /// Client-facing requirement, handled like in-house
    Client,
}

impl std::str::FromStr for RequirementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outsourced" => Ok(RequirementType::Outsourced),
            "inhouse" => Ok(RequirementType::Inhouse),
            "client" => Ok(RequirementType::Client),
            _ => Err(format!("Unknown requirement type: {}", s)),
        }
    }
}

/// Approval status of an in-house requirement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

/// Requirement priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

/// How a requirement is priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    Hourly,
    #[default]
    Project,
}

impl std::str::FromStr for PricingModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(PricingModel::Hourly),
            "project" => Ok(PricingModel::Project),
            _ => Err(format!("Unknown pricing model: {}", s)),
        }
    }
}

/// A submitted quotation. Field names follow the backend update payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "pricing_model", rename_all = "lowercase")]
pub enum Quotation {
    Hourly {
        hourly_rate: f64,
        estimated_hours: f64,
        currency: String,
    },
    Project {
        quoted_price: f64,
        currency: String,
    },
}

impl Quotation {
    /// Pricing model this quotation was written for
    pub fn pricing_model(&self) -> PricingModel {
        match self {
            Quotation::Hourly { .. } => PricingModel::Hourly,
            Quotation::Project { .. } => PricingModel::Project,
        }
    }

    /// Currency code of the quotation
    pub fn currency(&self) -> &str {
        match self {
            Quotation::Hourly { currency, .. } | Quotation::Project { currency, .. } => currency,
        }
    }

    /// Total quoted cost
    pub fn total_cost(&self) -> f64 {
        match self {
            Quotation::Hourly {
                hourly_rate,
                estimated_hours,
                ..
            } => hourly_rate * estimated_hours,
            Quotation::Project { quoted_price, .. } => *quoted_price,
        }
    }
}

/// A client work item tracked through quotation, work and approval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub description: String,

    pub status: RequirementStatus,

    #[serde(rename = "type", default)]
    pub requirement_type: RequirementType,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub pricing_model: PricingModel,

    /// Present only after a quotation has been submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotation: Option<Quotation>,

    /// Present only while the requirement is rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,

    #[serde(default)]
    pub is_archived: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<ApprovalStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver_workspace_id: Option<u64>,

    /// ISO 8601 last update timestamp
    pub updated_at: String,
}

impl Requirement {
    /// Create a new requirement awaiting a quote
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Requirement {
            id,
            title: title.into(),
            description: String::new(),
            status: RequirementStatus::Waiting,
            requirement_type: RequirementType::Outsourced,
            priority: Priority::Normal,
            pricing_model: PricingModel::Project,
            quotation: None,
            rejection_reason: None,
            is_archived: false,
            approval_status: None,
            receiver_workspace_id: None,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Return a new Requirement with the given status, updating the timestamp
    pub fn with_status(mut self, status: RequirementStatus) -> Self {
        self.status = status;
        self.touch_returning()
    }

    /// Return a new Requirement with the given quotation, updating the timestamp
    pub fn with_quotation(mut self, quotation: Option<Quotation>) -> Self {
        self.quotation = quotation;
        self.touch_returning()
    }

    /// Return a new Requirement with the given rejection reason, updating the timestamp
    pub fn with_rejection_reason(mut self, reason: Option<String>) -> Self {
        self.rejection_reason = reason;
        self.touch_returning()
    }

    /// Return a new Requirement with the given pricing model
    pub fn with_pricing_model(mut self, pricing_model: PricingModel) -> Self {
        self.pricing_model = pricing_model;
        self
    }

    /// Return a new Requirement with the given type
    pub fn with_type(mut self, requirement_type: RequirementType) -> Self {
        self.requirement_type = requirement_type;
        self
    }

    /// Whether the receiver has mapped the requirement into a workspace
    pub fn is_workspace_mapped(&self) -> bool {
        self.receiver_workspace_id.is_some()
    }

    /// Whether a quotation has been submitted
    pub fn has_quoted_price(&self) -> bool {
        self.quotation.is_some()
    }

    fn touch_returning(mut self) -> Self {
        self.updated_at = chrono::Utc::now().to_rfc3339();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&RequirementStatus::InProgress).unwrap(), "\"In_Progress\"");
        assert_eq!(serde_json::to_string(&RequirementStatus::OnHold).unwrap(), "\"On_Hold\"");
        assert_eq!(serde_json::to_string(&RequirementStatus::Waiting).unwrap(), "\"Waiting\"");
    }

    #[test]
    fn test_status_deserialization_accepts_legacy_spellings() {
        assert_eq!(
            serde_json::from_str::<RequirementStatus>("\"In_Progress\"").unwrap(),
            RequirementStatus::InProgress
        );
        assert_eq!(
            serde_json::from_str::<RequirementStatus>("\"in progress\"").unwrap(),
            RequirementStatus::InProgress
        );
        assert_eq!(
            serde_json::from_str::<RequirementStatus>("\"on-hold\"").unwrap(),
            RequirementStatus::OnHold
        );
        assert!(serde_json::from_str::<RequirementStatus>("\"Archived\"").is_err());
    }

    #[test]
    fn test_every_status_round_trips_through_its_name() {
        for status in REQUIREMENT_STATUSES {
            assert_eq!(RequirementStatus::canonicalize(status.as_str()), Some(*status));
        }
        assert_eq!(REQUIREMENT_STATUSES.len(), 12);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "draft".parse::<RequirementStatus>().unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_STATUS");
    }

    #[test]
    fn test_user_role_parse() {
        assert_eq!("Sender".parse::<UserRole>().unwrap(), UserRole::Sender);
        assert_eq!("receiver".parse::<UserRole>().unwrap(), UserRole::Receiver);
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_quotation_tagged_by_pricing_model() {
        let quote = Quotation::Hourly {
            hourly_rate: 50.0,
            estimated_hours: 10.0,
            currency: "USD".to_string(),
        };
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["pricing_model"], "hourly");
        assert_eq!(json["hourly_rate"], 50.0);
        assert_eq!(quote.total_cost(), 500.0);
        assert_eq!(quote.pricing_model(), PricingModel::Hourly);

        let parsed: Quotation =
            serde_json::from_str(r#"{"pricing_model":"project","quoted_price":1200,"currency":"EUR"}"#)
                .unwrap();
        assert_eq!(parsed.currency(), "EUR");
        assert_eq!(parsed.total_cost(), 1200.0);
    }

    #[test]
    fn test_requirement_from_backend_json() {
        let json = r#"{
            "id": 42,
            "title": "Landing page",
            "status": "Submitted",
            "type": "outsourced",
            "pricing_model": "hourly",
            "quotation": {"pricing_model": "hourly", "hourly_rate": 40, "estimated_hours": 5, "currency": "INR"},
            "receiver_workspace_id": 9,
            "updated_at": "2026-01-01T00:00:00Z"
        }"#;
        let req: Requirement = serde_json::from_str(json).unwrap();
        assert_eq!(req.status, RequirementStatus::Submitted);
        assert_eq!(req.pricing_model, PricingModel::Hourly);
        assert!(req.has_quoted_price());
        assert!(req.is_workspace_mapped());
        assert!(req.rejection_reason.is_none());
        assert!(!req.is_archived);
    }

    #[test]
    fn test_requirement_skips_none_in_serialization() {
        let req = Requirement::new(1, "Minimal");
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("\"quotation\":"));
        assert!(!json.contains("\"rejection_reason\":"));
        assert!(json.contains("\"type\":\"outsourced\""));
    }

    #[test]
    fn test_with_status_is_immutable() {
        let req = Requirement::new(1, "Test");
        let updated = req.clone().with_status(RequirementStatus::Submitted);
        assert_eq!(req.status, RequirementStatus::Waiting);
        assert_eq!(updated.status, RequirementStatus::Submitted);
        assert!(updated.updated_at >= req.updated_at);
    }
}

//! Settings records cached in durable client storage

use serde::{Deserialize, Serialize};

/// A document type employees are asked to upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTypeSetting {
    pub id: String,
    pub name: String,
    pub required: bool,
}

impl DocumentTypeSetting {
    pub fn new(id: impl Into<String>, name: impl Into<String>, required: bool) -> Self {
        DocumentTypeSetting {
            id: id.into(),
            name: name.into(),
            required,
        }
    }
}

/// Built-in document types used by the settings and profile pages
pub fn default_document_types() -> Vec<DocumentTypeSetting> {
    vec![
        DocumentTypeSetting::new("1", "Resume / CV", true),
        DocumentTypeSetting::new("2", "ID Proof", true),
        DocumentTypeSetting::new("3", "Contract Agreement", true),
        DocumentTypeSetting::new("4", "Supporting Documents", false),
        DocumentTypeSetting::new("5", "Additional Document", false),
    ]
}

/// Payment instructions printed on invoices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicePaymentPreset {
    pub id: String,
    pub name: String,
    pub content: String,
}

/// Built-in invoice payment presets
pub fn default_invoice_presets() -> Vec<InvoicePaymentPreset> {
    vec![
        InvoicePaymentPreset {
            id: "bank_transfer".to_string(),
            name: "Bank Transfer".to_string(),
            content: "Bank: HDFC Bank\nA/C Name: Fynix Digital Pvt Ltd\nA/C No: 50200012345678\nIFSC: HDFC0001234\nBranch: Mumbai".to_string(),
        },
        InvoicePaymentPreset {
            id: "upi".to_string(),
            name: "UPI".to_string(),
            content: "UPI ID: fynix@hdfcbank\nGPay/PhonePe: 9876543210".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let docs = default_document_types();
        assert_eq!(docs.len(), 5);
        assert_eq!(docs.iter().filter(|d| d.required).count(), 3);

        let presets = default_invoice_presets();
        assert_eq!(presets.len(), 2);
        assert_eq!(presets[0].id, "bank_transfer");
        assert_eq!(presets[1].id, "upi");
    }
}

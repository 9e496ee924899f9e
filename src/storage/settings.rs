//! Settings caches kept in durable client storage
//!
//! Both caches fall back to built-in defaults when the stored list is
//! missing, corrupt or empty. The stored entry is left in place in that
//! case; only an explicit write replaces it.

use serde_json::Value;

use crate::errors::{AlsoNotifyError, Result};
use crate::schemas::{default_document_types, default_invoice_presets, DocumentTypeSetting, InvoicePaymentPreset};

use super::Storage;

pub const DOCUMENT_TYPES_STORAGE_KEY: &str = "alsonotify_required_documents";
pub const PRESETS_STORAGE_KEY: &str = "invoice_payment_presets";

/// Parse a stored non-empty JSON array, logging anything else
fn load_list(storage: &impl Storage, key: &str) -> Result<Option<Vec<Value>>> {
    let Some(raw) = storage.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) if !items.is_empty() => Ok(Some(items)),
        Ok(_) => Ok(None),
        Err(e) => {
            tracing::warn!("Failed to parse {}: {}", key, e);
            Ok(None)
        }
    }
}

fn store_list<T: serde::Serialize>(storage: &mut impl Storage, key: &str, items: &[T]) -> Result<()> {
    let raw = serde_json::to_string(items).map_err(|e| AlsoNotifyError::InvalidJson(e.to_string()))?;
    storage.set(key, &raw)?;
    tracing::debug!("Saved {} entries to {}", items.len(), key);
    Ok(())
}

/// JavaScript-style truthiness, used for loosely typed stored flags
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce one stored entry: id defaults to its 1-based position, name to
/// the empty string, and `required` to its truthiness.
fn normalize_document_type(index: usize, value: &Value) -> DocumentTypeSetting {
    let field = |name: &str| value.get(name).filter(|v| !v.is_null());
    DocumentTypeSetting {
        id: field("id").map(as_text).unwrap_or_else(|| (index + 1).to_string()),
        name: field("name").map(as_text).unwrap_or_default(),
        required: field("required").map_or(false, truthy),
    }
}

/// Required employee document types
#[derive(Debug)]
pub struct DocumentTypeStore<S: Storage> {
    storage: S,
    document_types: Vec<DocumentTypeSetting>,
}

impl<S: Storage> DocumentTypeStore<S> {
    pub fn new(storage: S) -> Result<Self> {
        let document_types = match load_list(&storage, DOCUMENT_TYPES_STORAGE_KEY)? {
            Some(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| normalize_document_type(i, v))
                .collect(),
            None => default_document_types(),
        };
        Ok(DocumentTypeStore {
            storage,
            document_types,
        })
    }

    pub fn document_types(&self) -> &[DocumentTypeSetting] {
        &self.document_types
    }

    pub fn update_document_types(&mut self, document_types: Vec<DocumentTypeSetting>) -> Result<()> {
        store_list(&mut self.storage, DOCUMENT_TYPES_STORAGE_KEY, &document_types)?;
        self.document_types = document_types;
        Ok(())
    }

    /// Forget the stored list and go back to the built-in one
    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.storage.remove(DOCUMENT_TYPES_STORAGE_KEY)?;
        self.document_types = default_document_types();
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

/// Invoice payment instruction presets
#[derive(Debug)]
pub struct InvoicePresetStore<S: Storage> {
    storage: S,
    presets: Vec<InvoicePaymentPreset>,
}

impl<S: Storage> InvoicePresetStore<S> {
    pub fn new(storage: S) -> Result<Self> {
        let stored = load_list(&storage, PRESETS_STORAGE_KEY)?
            .map(|items| serde_json::from_value::<Vec<InvoicePaymentPreset>>(Value::Array(items)));
        let presets = match stored {
            Some(Ok(presets)) => presets,
            Some(Err(e)) => {
                tracing::warn!("Failed to parse {}: {}", PRESETS_STORAGE_KEY, e);
                default_invoice_presets()
            }
            None => default_invoice_presets(),
        };
        Ok(InvoicePresetStore { storage, presets })
    }

    pub fn presets(&self) -> &[InvoicePaymentPreset] {
        &self.presets
    }

    pub fn save_presets(&mut self, presets: Vec<InvoicePaymentPreset>) -> Result<()> {
        store_list(&mut self.storage, PRESETS_STORAGE_KEY, &presets)?;
        self.presets = presets;
        Ok(())
    }

    /// Append a preset. Ids are not checked for uniqueness.
    pub fn add_preset(&mut self, preset: InvoicePaymentPreset) -> Result<()> {
        let mut presets = self.presets.clone();
        presets.push(preset);
        self.save_presets(presets)
    }

    /// Remove every preset with `id`
    pub fn delete_preset(&mut self, id: &str) -> Result<()> {
        let presets = self.presets.iter().filter(|p| p.id != id).cloned().collect();
        self.save_presets(presets)
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

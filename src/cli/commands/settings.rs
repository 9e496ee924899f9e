//! Settings command - Show or edit cached settings

use std::path::Path;

use crate::config::load_config;
use crate::errors::{AlsoNotifyError, Result};
use crate::fs::{get_storage_path, resolve_cwd};
use crate::schemas::InvoicePaymentPreset;
use crate::storage::{DocumentTypeStore, FileStorage, InvoicePresetStore};

use super::print_json;

fn open_storage(cwd: Option<&Path>) -> Result<FileStorage> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;
    FileStorage::open(&get_storage_path(&root, &config))
}

pub fn documents(cwd: Option<&Path>, reset: bool, json: bool) -> Result<()> {
    let mut store = DocumentTypeStore::new(open_storage(cwd)?)?;
    if reset {
        store.reset_to_defaults()?;
    }

    if json {
        return print_json(&store.document_types());
    }
    for doc in store.document_types() {
        println!("{:>3}  {}{}", doc.id, doc.name, if doc.required { " (required)" } else { "" });
    }
    Ok(())
}

pub fn presets(cwd: Option<&Path>, add: Option<&[String]>, delete: Option<&str>, json: bool) -> Result<()> {
    let mut store = InvoicePresetStore::new(open_storage(cwd)?)?;

    if let Some(fields) = add {
        let [id, name, content] = fields else {
            return Err(AlsoNotifyError::SchemaValidation(
                "--add takes ID NAME CONTENT".to_string(),
            ));
        };
        store.add_preset(InvoicePaymentPreset {
            id: id.clone(),
            name: name.clone(),
            content: content.replace("\\n", "\n"),
        })?;
    }
    if let Some(id) = delete {
        store.delete_preset(id)?;
    }

    if json {
        return print_json(&store.presets());
    }
    for preset in store.presets() {
        println!("{} ({})", preset.name, preset.id);
        for line in preset.content.lines() {
            println!("    {}", line);
        }
    }
    Ok(())
}

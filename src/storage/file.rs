//! JSON-file storage backend
//!
//! All keys live in one JSON object on disk. Every write rewrites the file
//! atomically.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::errors::{AlsoNotifyError, Result};
use crate::fs::{read_json, write_json};

use super::Storage;

/// Storage persisted to a JSON file
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    /// * `Storage` - If the file exists but is not a JSON object of strings
    pub fn open(path: &Path) -> Result<Self> {
        let entries = match read_json::<BTreeMap<String, String>>(path) {
            Ok(entries) => entries,
            Err(AlsoNotifyError::FileNotFound(_)) => BTreeMap::new(),
            Err(e) => {
                return Err(AlsoNotifyError::Storage(format!(
                    "Cannot open storage {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        tracing::debug!("Opened storage {} with {} keys", path.display(), entries.len());
        Ok(FileStorage {
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk, then adopt them. A failed write leaves the
    /// in-memory view matching the file.
    fn commit(&mut self, entries: BTreeMap<String, String>) -> Result<()> {
        write_json(&self.path, &entries)
            .map_err(|e| AlsoNotifyError::wrap(e, format!("Failed to write {}", self.path.display())))?;
        self.entries = entries;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.clone();
        entries.insert(key.to_string(), value.to_string());
        self.commit(entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Ok(());
        }
        let mut entries = self.entries.clone();
        entries.remove(key);
        self.commit(entries)
    }
}

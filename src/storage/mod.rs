//! Durable client storage
//!
//! A string key-value store with two backends, and the typed stores built
//! on it: the active timer and the settings caches.

mod file;
mod memory;
pub mod settings;
pub mod timer;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use settings::{DocumentTypeStore, InvoicePresetStore, DOCUMENT_TYPES_STORAGE_KEY, PRESETS_STORAGE_KEY};
pub use timer::{TimerStore, TIMER_STORAGE_KEY};

use crate::errors::Result;

/// String key-value storage, one value per key
pub trait Storage {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing what was there
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<S: Storage + ?Sized> Storage for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

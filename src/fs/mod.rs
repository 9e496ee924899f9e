//! File system utilities for alsonotify
//!
//! Provides path resolution and JSON file operations.

mod json;
mod paths;

pub use json::{read_config, read_json, write_json};
pub use paths::{get_alsonotify_dir, get_config_path, get_storage_path, resolve_cwd};

//! Path resolution utilities for alsonotify
//!
//! Everything lives under `.alsonotify/` in the working directory.

use std::path::{Path, PathBuf};

use crate::schemas::Config;

/// Resolve the current working directory, optionally using an override.
///
/// # Arguments
/// * `cwd_option` - Optional override for the working directory
///
/// # Returns
/// The resolved working directory path
pub fn resolve_cwd(cwd_option: Option<&Path>) -> PathBuf {
    match cwd_option {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}

/// Get the path to the .alsonotify directory.
pub fn get_alsonotify_dir(root: &Path) -> PathBuf {
    root.join(".alsonotify")
}

/// Get the path to the config.json file.
pub fn get_config_path(root: &Path) -> PathBuf {
    get_alsonotify_dir(root).join("config.json")
}

/// Get the path of the key-value storage file.
///
/// A relative `storage_path` is resolved against `root`.
pub fn get_storage_path(root: &Path, config: &Config) -> PathBuf {
    let path = Path::new(&config.storage_path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cwd_override() {
        let path = Path::new("/tmp/project");
        assert_eq!(resolve_cwd(Some(path)), PathBuf::from("/tmp/project"));
    }

    #[test]
    fn test_config_path() {
        let root = Path::new("/work");
        assert_eq!(get_config_path(root), PathBuf::from("/work/.alsonotify/config.json"));
    }

    #[test]
    fn test_storage_path_relative_and_absolute() {
        let root = Path::new("/work");
        let config = Config::default();
        assert_eq!(
            get_storage_path(root, &config),
            PathBuf::from("/work/.alsonotify/storage.json")
        );

        let config = Config {
            storage_path: "/var/lib/alsonotify.json".to_string(),
            ..Config::default()
        };
        assert_eq!(get_storage_path(root, &config), PathBuf::from("/var/lib/alsonotify.json"));
    }
}

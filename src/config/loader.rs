//! Configuration loading with defaults

use std::path::Path;

use crate::errors::{AlsoNotifyError, Result};
use crate::fs;
use crate::schemas::Config;

/// Load configuration for a working directory, falling back to defaults.
///
/// Fields missing from `.alsonotify/config.json` take their defaults; a
/// missing file yields the default configuration.
///
/// # Errors
/// * `ConfigError` - If the file exists but cannot be parsed
pub fn load_config(root: &Path) -> Result<Config> {
    let config = fs::read_config(root).map_err(|e| match e {
        AlsoNotifyError::InvalidJson(message) => AlsoNotifyError::ConfigError(message),
        other => other,
    })?;

    if config.tab_param.trim().is_empty() {
        return Err(AlsoNotifyError::ConfigError("tab_param must not be empty".to_string()));
    }

    tracing::debug!("Loaded config from {}", root.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_defaults() {
        let temp = TempDir::new().unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.tab_param, "tab");
        assert_eq!(config.default_currency, "USD");
        assert!(config.public_routes.iter().any(|r| r == "/login"));
    }

    #[test]
    fn test_load_config_from_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".alsonotify");
        std_fs::create_dir(&dir).unwrap();

        let config_content = r#"{
            "tab_param": "view",
            "default_currency": "INR"
        }"#;
        std_fs::write(dir.join("config.json"), config_content).unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.tab_param, "view");
        assert_eq!(config.default_currency, "INR");
        // Default for unspecified field
        assert_eq!(config.storage_path, ".alsonotify/storage.json");
    }

    #[test]
    fn test_load_config_invalid() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".alsonotify");
        std_fs::create_dir(&dir).unwrap();
        std_fs::write(dir.join("config.json"), "{ nope").unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_load_config_empty_tab_param() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".alsonotify");
        std_fs::create_dir(&dir).unwrap();
        std_fs::write(dir.join("config.json"), r#"{"tab_param": " "}"#).unwrap();

        assert!(load_config(temp.path()).is_err());
    }
}

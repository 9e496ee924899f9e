//! Config schema - Configuration for alsonotify

use serde::{Deserialize, Serialize};

/// Main configuration for alsonotify
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Schema version for forward compatibility
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// JSON file backing durable client storage, relative to the working directory
    #[serde(default = "default_storage_path")]
    pub storage_path: String,

    /// Query parameter mirrored by tab sync
    #[serde(default = "default_tab_param")]
    pub tab_param: String,

    /// Path prefixes reachable without a session cookie
    #[serde(default = "default_public_routes")]
    pub public_routes: Vec<String>,

    /// Currency preselected in quotation forms
    #[serde(default = "default_currency")]
    pub default_currency: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_storage_path() -> String {
    ".alsonotify/storage.json".to_string()
}

fn default_tab_param() -> String {
    "tab".to_string()
}

fn default_public_routes() -> Vec<String> {
    vec![
        "/login".to_string(),
        "/register".to_string(),
        "/forgot-password".to_string(),
        "/company-details".to_string(),
    ]
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            schema_version: default_schema_version(),
            storage_path: default_storage_path(),
            tab_param: default_tab_param(),
            public_routes: default_public_routes(),
            default_currency: default_currency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.schema_version, 1);
        assert_eq!(config.storage_path, ".alsonotify/storage.json");
        assert_eq!(config.tab_param, "tab");
        assert_eq!(config.public_routes.len(), 4);
        assert_eq!(config.default_currency, "USD");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"tab_param": "view"}"#).unwrap();
        assert_eq!(config.tab_param, "view");
        assert_eq!(config.storage_path, ".alsonotify/storage.json");
        assert!(config.public_routes.contains(&"/login".to_string()));
    }
}

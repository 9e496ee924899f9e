//! Tab command - Apply a tab change to a URL

use std::path::Path;

use crate::config::load_config;
use crate::errors::{AlsoNotifyError, Result};
use crate::fs::resolve_cwd;
use crate::web::{History, MemoryHistory, TabSync, TabSyncOptions};

/// Print the active tab and resulting URL after switching to `tab`.
///
/// # Errors
/// * `SchemaValidation` - If `tab` is not one of the valid tabs
pub fn run(cwd: Option<&Path>, url: &str, tab: Option<&str>, default_tab: &str, valid: &[String]) -> Result<()> {
    let config = load_config(&resolve_cwd(cwd))?;
    let options = TabSyncOptions::new(default_tab, valid.iter().cloned()).with_param_name(&config.tab_param);
    let mut sync = TabSync::new(MemoryHistory::new(url), options);

    if let Some(tab) = tab {
        if !sync.set_active_tab(tab) {
            return Err(AlsoNotifyError::SchemaValidation(format!(
                "Invalid tab {}; valid tabs: {}",
                tab,
                valid.join(", ")
            )));
        }
    }

    println!("{}", sync.active_tab());
    println!("{}", sync.history().location().to_url());
    Ok(())
}

//! CLI command implementations

pub mod cta;
pub mod route;
pub mod settings;
pub mod tab;
pub mod timer;
pub mod transitions;
pub mod turn;

use serde::Serialize;

use crate::errors::{AlsoNotifyError, Result};

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).map_err(|e| AlsoNotifyError::InvalidJson(e.to_string()))?;
    println!("{}", out);
    Ok(())
}

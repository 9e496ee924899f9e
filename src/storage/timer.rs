//! Active timer persistence
//!
//! At most one timer record exists per storage. A record that no longer
//! parses is discarded at load so it cannot wedge the timer UI.

use crate::errors::{AlsoNotifyError, Result};
use crate::schemas::ActiveTimerState;

use super::Storage;

/// Storage key of the active timer record
pub const TIMER_STORAGE_KEY: &str = "activeTimer";

/// Typed access to the active timer record
#[derive(Debug)]
pub struct TimerStore<S: Storage> {
    storage: S,
    state: Option<ActiveTimerState>,
}

impl<S: Storage> TimerStore<S> {
    /// Load the stored timer. A corrupt record is logged and removed.
    pub fn new(mut storage: S) -> Result<Self> {
        let state = match storage.get(TIMER_STORAGE_KEY)? {
            None => None,
            Some(raw) => match serde_json::from_str::<ActiveTimerState>(&raw) {
                Ok(state) => Some(state),
                Err(e) => {
                    tracing::warn!("Failed to parse timer state, discarding it: {}", e);
                    storage.remove(TIMER_STORAGE_KEY)?;
                    None
                }
            },
        };
        Ok(TimerStore { storage, state })
    }

    pub fn timer_state(&self) -> Option<&ActiveTimerState> {
        self.state.as_ref()
    }

    /// A timer record exists, running or paused
    pub fn is_active(&self) -> bool {
        self.state.is_some()
    }

    /// Replace the stored record. No merge with the previous one.
    pub fn save_timer_state(&mut self, state: ActiveTimerState) -> Result<()> {
        let raw = serde_json::to_string(&state).map_err(|e| AlsoNotifyError::InvalidJson(e.to_string()))?;
        self.storage.set(TIMER_STORAGE_KEY, &raw)?;
        tracing::debug!("Saved timer for task {}", state.task_id);
        self.state = Some(state);
        Ok(())
    }

    pub fn clear_timer_state(&mut self) -> Result<()> {
        self.storage.remove(TIMER_STORAGE_KEY)?;
        self.state = None;
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}

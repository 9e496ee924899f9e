//! Timer command - Manage the active work timer

use std::path::Path;

use chrono::Utc;

use crate::config::load_config;
use crate::errors::{AlsoNotifyError, Result};
use crate::format::format_duration;
use crate::fs::{get_storage_path, resolve_cwd};
use crate::schemas::ActiveTimerState;
use crate::storage::{FileStorage, TimerStore};

use super::print_json;

fn open_store(cwd: Option<&Path>) -> Result<TimerStore<FileStorage>> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;
    TimerStore::new(FileStorage::open(&get_storage_path(&root, &config))?)
}

fn require_timer(store: &TimerStore<FileStorage>) -> Result<ActiveTimerState> {
    store
        .timer_state()
        .cloned()
        .ok_or_else(|| AlsoNotifyError::StateTransition("No active timer".to_string()))
}

fn describe(timer: &ActiveTimerState) {
    let state = if timer.is_paused() { "paused" } else { "running" };
    println!(
        "#{} {} - {} ({})",
        timer.task_id,
        timer.task_name,
        format_duration(timer.elapsed_seconds(Utc::now())),
        state
    );
}

pub fn show(cwd: Option<&Path>, json: bool) -> Result<()> {
    let store = open_store(cwd)?;
    if json {
        return print_json(&store.timer_state());
    }
    match store.timer_state() {
        Some(timer) => describe(timer),
        None => println!("No active timer"),
    }
    Ok(())
}

/// Start a timer. Only one timer may exist at a time.
pub fn start(cwd: Option<&Path>, task_id: u64, task_name: &str, worklog_id: Option<u64>) -> Result<()> {
    let mut store = open_store(cwd)?;
    if let Some(existing) = store.timer_state() {
        return Err(AlsoNotifyError::StateTransition(format!(
            "A timer is already active for task {}; stop it first",
            existing.task_id
        )));
    }
    let timer = ActiveTimerState::start(task_id, task_name, worklog_id, Utc::now());
    describe(&timer);
    store.save_timer_state(timer)
}

pub fn pause(cwd: Option<&Path>) -> Result<()> {
    let mut store = open_store(cwd)?;
    let timer = require_timer(&store)?;
    if timer.is_paused() {
        return Err(AlsoNotifyError::StateTransition("Timer is already paused".to_string()));
    }
    let paused = timer.pause(Utc::now());
    describe(&paused);
    store.save_timer_state(paused)
}

pub fn resume(cwd: Option<&Path>, worklog_id: Option<u64>) -> Result<()> {
    let mut store = open_store(cwd)?;
    let timer = require_timer(&store)?;
    if !timer.is_paused() {
        return Err(AlsoNotifyError::StateTransition("Timer is not paused".to_string()));
    }
    let resumed = timer.resume(worklog_id, Utc::now());
    describe(&resumed);
    store.save_timer_state(resumed)
}

/// Clear the timer, printing the time it had accumulated
pub fn stop(cwd: Option<&Path>) -> Result<()> {
    let mut store = open_store(cwd)?;
    let timer = require_timer(&store)?;
    println!(
        "Stopped #{} {} at {}",
        timer.task_id,
        timer.task_name,
        format_duration(timer.elapsed_seconds(Utc::now()))
    );
    store.clear_timer_state()
}

//! Active timer record kept in durable client storage

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::format::parse_as_utc;

/// The single running (or paused) work timer of a browser profile.
///
/// Field names match the `activeTimer` storage record so existing stored
/// values load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTimerState {
    pub task_id: u64,

    pub task_name: String,

    /// ISO 8601 start; empty while paused
    pub start_time: String,

    pub worklog_id: Option<u64>,

    pub is_running: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_paused: Option<bool>,

    /// Seconds accumulated before the pause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused_elapsed: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_time: Option<String>,
}

impl ActiveTimerState {
    /// A timer started now for the given task
    pub fn start(
        task_id: u64,
        task_name: impl Into<String>,
        worklog_id: Option<u64>,
        now: DateTime<Utc>,
    ) -> Self {
        ActiveTimerState {
            task_id,
            task_name: task_name.into(),
            start_time: iso(now),
            worklog_id,
            is_running: true,
            is_paused: None,
            paused_elapsed: None,
            resume_time: None,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused.unwrap_or(false)
    }

    /// Seconds of work represented by this timer at `now`
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        if self.is_paused() || !self.is_running || self.start_time.is_empty() {
            return self.paused_elapsed.unwrap_or(0);
        }
        let started = parse_as_utc(&self.start_time);
        (now - started).num_seconds().max(0) as u64
    }

    /// Return the paused form of this timer; the worklog is closed on pause.
    pub fn pause(&self, now: DateTime<Utc>) -> Self {
        ActiveTimerState {
            task_id: self.task_id,
            task_name: self.task_name.clone(),
            start_time: String::new(),
            worklog_id: None,
            is_running: false,
            is_paused: Some(true),
            paused_elapsed: Some(self.elapsed_seconds(now)),
            resume_time: None,
        }
    }

    /// Return the running form of this timer.
    ///
    /// The start time is shifted back by the paused elapsed seconds so the
    /// displayed elapsed time continues from the pause. An elapsed value
    /// that cannot be represented as a start time restarts from `now`.
    pub fn resume(&self, worklog_id: Option<u64>, now: DateTime<Utc>) -> Self {
        let previous = self.paused_elapsed.unwrap_or(0);
        let adjusted_start = i64::try_from(previous)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|elapsed| now.checked_sub_signed(elapsed))
            .unwrap_or_else(|| {
                tracing::warn!("Paused elapsed time out of range ({}s); resuming from now", previous);
                now
            });
        ActiveTimerState {
            task_id: self.task_id,
            task_name: self.task_name.clone(),
            start_time: iso(adjusted_start),
            worklog_id,
            is_running: true,
            is_paused: Some(false),
            paused_elapsed: Some(0),
            resume_time: Some(iso(now)),
        }
    }
}

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_serializes_with_storage_field_names() {
        let timer = ActiveTimerState::start(5, "Wireframes", Some(11), at(0));
        let json = serde_json::to_value(&timer).unwrap();
        assert_eq!(json["taskId"], 5);
        assert_eq!(json["taskName"], "Wireframes");
        assert_eq!(json["worklogId"], 11);
        assert_eq!(json["isRunning"], true);
        assert!(json.get("isPaused").is_none());
    }

    #[test]
    fn test_parses_stored_browser_record() {
        let raw = r#"{"taskId":3,"taskName":"QA","startTime":"","worklogId":null,
                      "isRunning":false,"isPaused":true,"pausedElapsed":80}"#;
        let timer: ActiveTimerState = serde_json::from_str(raw).unwrap();
        assert!(timer.is_paused());
        assert_eq!(timer.elapsed_seconds(at(1000)), 80);
    }

    #[test]
    fn test_resume_with_out_of_range_elapsed_starts_now() {
        for elapsed in [100_000_000_000_000_000u64, u64::MAX] {
            let raw = format!(
                r#"{{"taskId":3,"taskName":"QA","startTime":"","worklogId":null,"isRunning":false,"isPaused":true,"pausedElapsed":{}}}"#,
                elapsed
            );
            let timer: ActiveTimerState = serde_json::from_str(&raw).unwrap();
            let resumed = timer.resume(None, at(500));
            assert!(resumed.is_running);
            assert_eq!(resumed.elapsed_seconds(at(530)), 30);
        }
    }

    #[test]
    fn test_elapsed_running() {
        let timer = ActiveTimerState::start(1, "Task", None, at(0));
        assert_eq!(timer.elapsed_seconds(at(90)), 90);
        // clock skew never yields negative time
        assert_eq!(timer.elapsed_seconds(at(-5)), 0);
    }

    #[test]
    fn test_pause_then_resume_continues_elapsed() {
        let timer = ActiveTimerState::start(1, "Task", Some(4), at(0));
        let paused = timer.pause(at(80));
        assert!(!paused.is_running);
        assert_eq!(paused.worklog_id, None);
        assert_eq!(paused.paused_elapsed, Some(80));
        assert_eq!(paused.elapsed_seconds(at(500)), 80);

        let resumed = paused.resume(Some(5), at(500));
        assert!(resumed.is_running);
        assert!(!resumed.is_paused());
        assert_eq!(resumed.elapsed_seconds(at(500)), 80);
        assert_eq!(resumed.elapsed_seconds(at(520)), 100);
    }
}

use serde::{Deserialize, Serialize};

/// Severity of a single log line inside an execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobLog {
    pub timestamp: String,
    pub message: String,
    pub level: LogLevel,
}

/// Remote-truth record for one job, as of the most recent poll.
///
/// Replaced wholesale on every tick; the client never mutates it. An empty
/// `err` means "no error", and the provider may also omit the field
/// entirely, which deserializes to the same thing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSnapshot {
    pub name: String,
    /// Seconds between scheduled runs.
    pub interval: i64,
    /// Whether the job is enabled on the scheduler side.
    pub running: bool,
    pub last_run_unix: i64,
    pub next_run_unix: i64,
    #[serde(default)]
    pub err: String,
    /// True while a run is in flight.
    pub is_executing: bool,
    #[serde(default)]
    pub current_status: String,
}

impl JobSnapshot {
    pub fn has_error(&self) -> bool {
        !self.err.trim().is_empty()
    }

    /// Seconds remaining until the next scheduled run, clamped at zero.
    pub fn seconds_until_next(&self, now_unix: i64) -> i64 {
        (self.next_run_unix - now_unix).max(0)
    }

    /// Interval progress for the status board, 0..=100. Pegged at 100 while
    /// a run is in flight.
    pub fn progress_percent(&self, now_unix: i64) -> f64 {
        if self.is_executing {
            return 100.0;
        }
        if self.interval <= 0 {
            return 0.0;
        }
        let elapsed = (now_unix - self.last_run_unix) as f64;
        (elapsed / self.interval as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Render a countdown as `1h 2m 3s`, dropping leading zero units.
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{}h {}m {}s", h, m, s)
    } else if m > 0 {
        format!("{}m {}s", m, s)
    } else {
        format!("{}s", s)
    }
}

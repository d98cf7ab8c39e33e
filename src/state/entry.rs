//! Timer entry and active timer structures

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Format used for the finalization timestamp of an entry
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A completed timer session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerEntry {
    pub id: u64,
    /// Local wall-clock time at which the timer was stopped
    #[serde(alias = "datetime")]
    pub timestamp: String,
    /// Whole seconds, truncated
    pub duration: u64,
    #[serde(default)]
    pub description: String,
}

impl TimerEntry {
    /// Create a finalized entry with an empty description
    pub fn new(id: u64, finished_at: DateTime<Local>, duration: u64) -> Self {
        Self {
            id,
            timestamp: finished_at.format(TIMESTAMP_FORMAT).to_string(),
            duration,
            description: String::new(),
        }
    }
}

/// The single open timer, either running or paused
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTimer {
    /// Epoch seconds at which the current segment began; stale while paused
    #[serde(alias = "start_time")]
    pub start_time: f64,
    /// Seconds collected from segments closed by a pause
    #[serde(default)]
    pub accumulated: f64,
    #[serde(default)]
    pub paused: bool,
}

impl ActiveTimer {
    /// Create a running timer whose first segment begins at `now`
    pub fn started_at(now: f64) -> Self {
        Self {
            start_time: now,
            accumulated: 0.0,
            paused: false,
        }
    }

    /// Total elapsed seconds of this timer, including the open segment
    pub fn elapsed(&self, now: f64) -> f64 {
        if self.paused {
            self.accumulated
        } else {
            self.accumulated + (now - self.start_time)
        }
    }

    /// Elapsed time truncated to whole seconds
    pub fn elapsed_seconds(&self, now: f64) -> u64 {
        truncate_seconds(self.elapsed(now))
    }
}

/// Convert a wall-clock instant to fractional seconds since the Unix epoch
pub fn epoch_seconds(now: DateTime<Local>) -> f64 {
    now.timestamp_micros() as f64 / 1_000_000.0
}

/// Floor to whole seconds; negative spans (clock going backwards) count as zero
pub fn truncate_seconds(seconds: f64) -> u64 {
    seconds.max(0.0).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn running_timer_adds_open_segment() {
        let timer = ActiveTimer {
            start_time: 100.0,
            accumulated: 7.5,
            paused: false,
        };
        assert_eq!(timer.elapsed(110.0), 17.5);
        assert_eq!(timer.elapsed_seconds(110.0), 17);
    }

    #[test]
    fn paused_timer_ignores_wall_clock() {
        let timer = ActiveTimer {
            start_time: 100.0,
            accumulated: 42.9,
            paused: true,
        };
        assert_eq!(timer.elapsed_seconds(10_000.0), 42);
    }

    #[test]
    fn truncation_never_rounds_up() {
        assert_eq!(truncate_seconds(5.9), 5);
        assert_eq!(truncate_seconds(0.999), 0);
        assert_eq!(truncate_seconds(-3.0), 0);
    }

    #[test]
    fn entry_timestamp_uses_local_format() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let entry = TimerEntry::new(4, at, 90);
        assert_eq!(entry.timestamp, "2024-03-09 14:05:07");
        assert!(entry.description.is_empty());
    }
}

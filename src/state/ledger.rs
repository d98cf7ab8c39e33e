//! The timer ledger: completed entries plus the at-most-one open timer

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::entry::{epoch_seconds, ActiveTimer, TimerEntry};
use crate::error::TrackerError;

/// Outcome of a state machine transition. Wrong-state requests are reported
/// here rather than as errors since they come from ordinary double clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerStatus {
    #[serde(rename = "started")]
    Started,
    #[serde(rename = "already running")]
    AlreadyRunning,
    #[serde(rename = "paused")]
    Paused,
    #[serde(rename = "already paused")]
    AlreadyPaused,
    #[serde(rename = "resumed")]
    Resumed,
    #[serde(rename = "not paused")]
    NotPaused,
    #[serde(rename = "no timer running")]
    NoTimerRunning,
    #[serde(rename = "updated")]
    Updated,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Started => "started",
            TimerStatus::AlreadyRunning => "already running",
            TimerStatus::Paused => "paused",
            TimerStatus::AlreadyPaused => "already paused",
            TimerStatus::Resumed => "resumed",
            TimerStatus::NotPaused => "not paused",
            TimerStatus::NoTimerRunning => "no timer running",
            TimerStatus::Updated => "updated",
        }
    }
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of stopping the timer
#[derive(Debug, Clone, PartialEq)]
pub enum StopOutcome {
    Stopped(TimerEntry),
    NoTimerRunning,
}

/// Aggregate of finalized entries and the open timer, as persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ledger {
    #[serde(alias = "timers")]
    pub entries: Vec<TimerEntry>,
    #[serde(alias = "running")]
    pub active: Option<ActiveTimer>,
}

impl Ledger {
    /// Open a new timer unless one is already running or paused
    pub fn start(&mut self, now: DateTime<Local>) -> TimerStatus {
        match self.active {
            Some(_) => TimerStatus::AlreadyRunning,
            None => {
                self.active = Some(ActiveTimer::started_at(epoch_seconds(now)));
                TimerStatus::Started
            }
        }
    }

    /// Close the current segment, folding its length into the accumulator
    pub fn pause(&mut self, now: DateTime<Local>) -> TimerStatus {
        match self.active.as_mut() {
            None => TimerStatus::NoTimerRunning,
            Some(timer) if timer.paused => TimerStatus::AlreadyPaused,
            Some(timer) => {
                timer.accumulated += epoch_seconds(now) - timer.start_time;
                timer.paused = true;
                TimerStatus::Paused
            }
        }
    }

    /// Begin a new segment, keeping the accumulated time
    pub fn resume(&mut self, now: DateTime<Local>) -> TimerStatus {
        match self.active.as_mut() {
            None => TimerStatus::NoTimerRunning,
            Some(timer) if !timer.paused => TimerStatus::NotPaused,
            Some(timer) => {
                timer.start_time = epoch_seconds(now);
                timer.paused = false;
                TimerStatus::Resumed
            }
        }
    }

    /// Finalize the open timer into a new entry
    pub fn stop(&mut self, now: DateTime<Local>) -> StopOutcome {
        let Some(timer) = self.active.take() else {
            return StopOutcome::NoTimerRunning;
        };

        let duration = timer.elapsed_seconds(epoch_seconds(now));
        let entry = TimerEntry::new(self.next_id(), now, duration);
        self.entries.push(entry.clone());
        StopOutcome::Stopped(entry)
    }

    /// Sum of finalized durations plus the truncated elapsed time of the open timer
    pub fn total_seconds(&self, now: DateTime<Local>) -> u64 {
        let finished = self
            .entries
            .iter()
            .fold(0u64, |total, entry| total.saturating_add(entry.duration));
        let open = self
            .active
            .as_ref()
            .map_or(0, |timer| timer.elapsed_seconds(epoch_seconds(now)));
        finished.saturating_add(open)
    }

    /// Replace the description of an existing entry
    pub fn update_description(&mut self, id: u64, description: String) -> Result<TimerEntry, TrackerError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(TrackerError::EntryNotFound { id })?;

        entry.description = description;
        Ok(entry.clone())
    }

    /// Next entry id; equals `len + 1` while entries are only ever appended
    fn next_id(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| entry.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }
}

//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::state::{ActiveTimer, StopOutcome, TimerEntry, TimerStatus};

/// Response for state machine transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: TimerStatus,
}

impl From<TimerStatus> for StatusResponse {
    fn from(status: TimerStatus) -> Self {
        Self { status }
    }
}

/// Response for POST /stop: the new entry, or a status when nothing was running
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StopResponse {
    Stopped(TimerEntry),
    Idle(StatusResponse),
}

impl From<StopOutcome> for StopResponse {
    fn from(outcome: StopOutcome) -> Self {
        match outcome {
            StopOutcome::Stopped(entry) => StopResponse::Stopped(entry),
            StopOutcome::NoTimerRunning => StopResponse::Idle(TimerStatus::NoTimerRunning.into()),
        }
    }
}

/// Full ledger snapshot with the computed total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerResponse {
    pub entries: Vec<TimerEntry>,
    pub active: Option<ActiveTimer>,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalResponse {
    pub total: u64,
}

/// Request body for POST /update_description. The id is kept as raw JSON
/// so a string or negative id reads as "no such entry" instead of a
/// rejected body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDescriptionRequest {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub description: String,
}

impl UpdateDescriptionRequest {
    /// The entry id, when the request carries a non-negative integer
    pub fn entry_id(&self) -> Option<u64> {
        self.id.as_u64()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDescriptionResponse {
    pub status: TimerStatus,
    pub entry: TimerEntry,
}

/// Body of failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn not_found() -> Self {
        Self {
            status: "not found".to_string(),
            message: None,
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: "error".to_string(),
            message: Some(message),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}

//! HTTP endpoint handlers
//!
//! Each handler runs exactly one ledger operation through [`AppState`].

use std::sync::Arc;
use axum::{
    extract::State,
    response::{Html, Json},
};
use tracing::info;

use crate::{
    error::TrackerError,
    state::{AppState, StopOutcome, TimerStatus},
};
use super::responses::{
    HealthResponse, LedgerResponse, StatusResponse, StopResponse, TotalResponse,
    UpdateDescriptionRequest, UpdateDescriptionResponse,
};

/// Handle GET / - Render the ledger page
pub async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, TrackerError> {
    let (ledger, total) = state.read_ledger(|ledger, now| (ledger.clone(), ledger.total_seconds(now)))?;
    let page = state.renderer.render_index(&state.timer_name, &ledger, total)?;
    Ok(Html(page))
}

/// Handle GET /state - Return entries, active timer and total
pub async fn ledger_handler(State(state): State<Arc<AppState>>) -> Result<Json<LedgerResponse>, TrackerError> {
    let response = state.read_ledger(|ledger, now| LedgerResponse {
        entries: ledger.entries.clone(),
        active: ledger.active.clone(),
        total: ledger.total_seconds(now),
    })?;
    Ok(Json(response))
}

/// Handle GET /total - Return the running total in seconds
pub async fn total_handler(State(state): State<Arc<AppState>>) -> Result<Json<TotalResponse>, TrackerError> {
    let total = state.read_ledger(|ledger, now| ledger.total_seconds(now))?;
    Ok(Json(TotalResponse { total }))
}

/// Handle POST /start - Open a new timer
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, TrackerError> {
    let status = state.update_ledger("start", |ledger, now| Ok(ledger.start(now)))?;
    info!("Start endpoint called - {}", status);
    Ok(Json(status.into()))
}

/// Handle POST /pause - Pause the running timer
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, TrackerError> {
    let status = state.update_ledger("pause", |ledger, now| Ok(ledger.pause(now)))?;
    info!("Pause endpoint called - {}", status);
    Ok(Json(status.into()))
}

/// Handle POST /resume - Resume the paused timer
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, TrackerError> {
    let status = state.update_ledger("resume", |ledger, now| Ok(ledger.resume(now)))?;
    info!("Resume endpoint called - {}", status);
    Ok(Json(status.into()))
}

/// Handle POST /stop - Finalize the open timer into an entry
pub async fn stop_handler(State(state): State<Arc<AppState>>) -> Result<Json<StopResponse>, TrackerError> {
    let outcome = state.update_ledger("stop", |ledger, now| Ok(ledger.stop(now)))?;
    match &outcome {
        StopOutcome::Stopped(entry) => {
            info!("Stop endpoint called - entry {} recorded ({}s)", entry.id, entry.duration)
        }
        StopOutcome::NoTimerRunning => info!("Stop endpoint called - no timer running"),
    }
    Ok(Json(outcome.into()))
}

/// Handle POST /update_description - Set the description of an entry
pub async fn update_description_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<UpdateDescriptionRequest>,
) -> Result<Json<UpdateDescriptionResponse>, TrackerError> {
    let id = request.entry_id().ok_or(TrackerError::MissingEntryId)?;
    let entry = state.update_ledger("update_description", |ledger, _| {
        ledger.update_description(id, request.description)
    })?;

    info!("Description of entry {} updated", entry.id);
    Ok(Json(UpdateDescriptionResponse {
        status: TimerStatus::Updated,
        entry,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime()))
}

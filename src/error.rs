//! Error types for request handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::error;

use crate::{api::responses::ErrorResponse, store::StoreError};

/// Failures surfaced to HTTP callers. Wrong-state timer requests are not
/// errors; they are reported through [`crate::state::TimerStatus`].
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Timer entry {id} not found")]
    EntryNotFound { id: u64 },

    #[error("Request did not name a valid timer entry")]
    MissingEntryId,

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl TrackerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TrackerError::EntryNotFound { .. } | TrackerError::MissingEntryId => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = if status == StatusCode::NOT_FOUND {
            ErrorResponse::not_found()
        } else {
            error!("Request failed: {}", self);
            ErrorResponse::error(self.to_string())
        };
        (status, Json(body)).into_response()
    }
}

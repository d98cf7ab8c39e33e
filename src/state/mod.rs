//! State management module
//!
//! This module contains the timer ledger and the shared application state
//! that serializes access to the ledger store.

pub mod entry;
pub mod ledger;
pub mod app_state;

// Re-export main types
pub use entry::{ActiveTimer, TimerEntry};
pub use ledger::{Ledger, StopOutcome, TimerStatus};
pub use app_state::AppState;

//! Timer Ledger - A single-user stopwatch-style time tracking server
//!
//! This library provides the timer state machine (start, pause, resume, stop),
//! a flat-file store that persists the ledger between requests, and the HTTP
//! surface that renders it as JSON or an HTML page.

pub mod config;
pub mod error;
pub mod state;
pub mod store;
pub mod api;
pub mod view;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::TrackerError;
pub use state::{AppState, Ledger};
pub use store::{LedgerStore, YamlFileStore};
pub use api::create_router;
pub use utils::signals::shutdown_signal;

//! Main application state management

use std::{sync::{Mutex, MutexGuard}, time::Instant};
use chrono::{DateTime, Local};
use tracing::{debug, info, warn};

use super::Ledger;
use crate::{error::TrackerError, store::LedgerStore, view::PageRenderer};

/// Shared state handed to every request handler
pub struct AppState {
    /// Ledger store; the lock spans each whole load-mutate-save cycle
    store: Mutex<Box<dyn LedgerStore>>,
    /// Display label for the tracked activity
    pub timer_name: String,
    /// HTML page renderer
    pub renderer: PageRenderer,
    /// Server metadata
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState around a ledger store
    pub fn new(store: Box<dyn LedgerStore>, timer_name: String) -> Result<Self, TrackerError> {
        Ok(Self {
            store: Mutex::new(store),
            timer_name,
            renderer: PageRenderer::new()?,
            start_time: Instant::now(),
        })
    }

    /// Load the ledger, apply one operation and persist the ledger if the
    /// operation changed it
    pub fn update_ledger<R, F>(&self, action: &str, op: F) -> Result<R, TrackerError>
    where
        F: FnOnce(&mut Ledger, DateTime<Local>) -> Result<R, TrackerError>,
    {
        let store = self.lock_store();

        let mut ledger = load_or_empty(&**store);
        let before = ledger.clone();
        let result = op(&mut ledger, Local::now())?;

        if ledger != before {
            store.save(&ledger)?;
            info!("Ledger updated by {}", action);
        } else {
            debug!("{} left the ledger unchanged", action);
        }

        Ok(result)
    }

    /// Load the ledger and evaluate a read-only query against it
    pub fn read_ledger<R, F>(&self, query: F) -> Result<R, TrackerError>
    where
        F: FnOnce(&Ledger, DateTime<Local>) -> R,
    {
        let store = self.lock_store();

        let ledger = load_or_empty(&**store);
        Ok(query(&ledger, Local::now()))
    }

    /// The mutex guards only the store handle, so a panic in an earlier
    /// request leaves nothing half-written and the lock can be reclaimed
    fn lock_store(&self) -> MutexGuard<'_, Box<dyn LedgerStore>> {
        self.store.lock().unwrap_or_else(|poisoned| {
            warn!("Recovering ledger store lock after a panicked request");
            poisoned.into_inner()
        })
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

/// Unreadable or corrupt documents degrade to an empty ledger
fn load_or_empty(store: &dyn LedgerStore) -> Ledger {
    store.load().unwrap_or_else(|e| {
        warn!("Failed to load ledger, using an empty one: {}", e);
        Ledger::default()
    })
}

//! Persistence of the ledger between requests
//!
//! The store holds the whole ledger as one document. Every request reads it
//! in full and, when the ledger changed, overwrites it in full.

pub mod yaml_file;

use std::path::PathBuf;
use thiserror::Error;

use crate::state::Ledger;

pub use yaml_file::YamlFileStore;

/// Failures reading or writing the persisted document
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed ledger document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to serialize ledger: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// Whole-document load/save boundary for the ledger
pub trait LedgerStore: Send {
    /// Read the persisted ledger. A document that does not exist yet is an
    /// empty ledger, not an error.
    fn load(&self) -> Result<Ledger, StoreError>;

    /// Overwrite the persisted ledger
    fn save(&self, ledger: &Ledger) -> Result<(), StoreError>;
}

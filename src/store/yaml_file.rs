//! YAML flat-file ledger store

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use super::{LedgerStore, StoreError};
use crate::state::{ActiveTimer, Ledger, TimerEntry};

/// Ledger persisted as a single YAML document on disk
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn parse_error(&self, source: serde_yaml::Error) -> StoreError {
        StoreError::Parse {
            path: self.path.clone(),
            source,
        }
    }

    /// Decode `entries` and `active` independently so a malformed field
    /// costs only itself. Unreadable entries are skipped one by one.
    fn decode_fields(&self, fields: &Mapping) -> Ledger {
        let entries = match field(fields, "entries", "timers") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items
                .iter()
                .filter_map(|item| {
                    serde_yaml::from_value::<TimerEntry>(item.clone())
                        .map_err(|e| warn!("Skipping unreadable entry in {}: {}", self.path.display(), e))
                        .ok()
                })
                .collect(),
            Some(other) => {
                warn!("Ignoring malformed entries in {}: {:?}", self.path.display(), other);
                Vec::new()
            }
        };

        let active = match field(fields, "active", "running") {
            None | Some(Value::Null) => None,
            Some(value) => serde_yaml::from_value::<ActiveTimer>(value.clone())
                .map_err(|e| warn!("Ignoring malformed active timer in {}: {}", self.path.display(), e))
                .ok(),
        };

        Ledger { entries, active }
    }
}

/// Look up a field under its current key, falling back to the older layout's key
fn field<'a>(fields: &'a Mapping, key: &str, legacy_key: &str) -> Option<&'a Value> {
    fields.get(key).or_else(|| fields.get(legacy_key))
}

impl LedgerStore for YamlFileStore {
    fn load(&self) -> Result<Ledger, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No ledger at {}, starting empty", self.path.display());
                return Ok(Ledger::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        if contents.trim().is_empty() {
            return Ok(Ledger::default());
        }

        let document: Value = serde_yaml::from_str(&contents).map_err(|source| self.parse_error(source))?;
        match document {
            Value::Null => Ok(Ledger::default()),
            Value::Mapping(fields) => Ok(self.decode_fields(&fields)),
            other => serde_yaml::from_value(other).map_err(|source| self.parse_error(source)),
        }
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let document = serde_yaml::to_string(ledger).map_err(StoreError::Serialize)?;
        fs::write(&self.path, document).map_err(|e| self.io_error(e))?;

        debug!(
            "Saved ledger to {} ({} entries, active={})",
            self.path.display(),
            ledger.entries.len(),
            ledger.active.is_some()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ledger() -> Ledger {
        Ledger {
            entries: vec![TimerEntry {
                id: 1,
                timestamp: "2024-03-09 14:05:07".to_string(),
                duration: 125,
                description: "review".to_string(),
            }],
            active: Some(ActiveTimer {
                start_time: 1_700_000_000.25,
                accumulated: 12.5,
                paused: true,
            }),
        }
    }

    #[test]
    fn missing_file_is_empty_ledger() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));
        assert_eq!(store.load().unwrap(), Ledger::default());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("data").join("timers.yaml"));

        store.save(&sample_ledger()).unwrap();
        assert!(store.path().exists());
        assert_eq!(store.load().unwrap(), sample_ledger());
    }

    #[test]
    fn written_document_uses_canonical_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));
        store.save(&sample_ledger()).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("entries:"));
        assert!(text.contains("startTime:"));
        assert!(!text.contains("timers:"));
    }

    #[test]
    fn empty_and_null_documents_are_empty_ledgers() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));

        fs::write(store.path(), "").unwrap();
        assert_eq!(store.load().unwrap(), Ledger::default());

        fs::write(store.path(), "null\n").unwrap();
        assert_eq!(store.load().unwrap(), Ledger::default());
    }

    #[test]
    fn missing_fields_default_individually() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));

        fs::write(store.path(), "active:\n  startTime: 1700000000.0\n").unwrap();
        let ledger = store.load().unwrap();
        assert!(ledger.entries.is_empty());

        let timer = ledger.active.unwrap();
        assert_eq!(timer.accumulated, 0.0);
        assert!(!timer.paused);
    }

    #[test]
    fn reads_legacy_key_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));
        let legacy = "\
timers:
- id: 1
  datetime: '2024-01-02 03:04:05'
  duration: 30
  description: ''
running:
  start_time: 1700000000.5
  accumulated: 0
  paused: false
";
        fs::write(store.path(), legacy).unwrap();

        let ledger = store.load().unwrap();
        assert_eq!(ledger.entries.len(), 1);
        assert_eq!(ledger.entries[0].timestamp, "2024-01-02 03:04:05");
        assert_eq!(ledger.active.unwrap().start_time, 1_700_000_000.5);
    }

    #[test]
    fn malformed_entries_keep_active_timer() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));
        fs::write(
            store.path(),
            "entries: 5\nactive:\n  startTime: 1700000000.0\n  accumulated: 30.0\n  paused: true\n",
        )
        .unwrap();

        let ledger = store.load().unwrap();
        assert!(ledger.entries.is_empty());

        let timer = ledger.active.unwrap();
        assert_eq!(timer.accumulated, 30.0);
        assert!(timer.paused);
    }

    #[test]
    fn malformed_active_timer_keeps_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));
        fs::write(
            store.path(),
            "entries:\n- id: 1\n  timestamp: '2024-01-02 03:04:05'\n  duration: 40\nactive: {}\n",
        )
        .unwrap();

        let ledger = store.load().unwrap();
        assert!(ledger.active.is_none());
        assert_eq!(ledger.entries.len(), 1);
        assert_eq!(ledger.entries[0].duration, 40);
    }

    #[test]
    fn unreadable_entry_is_skipped_alone() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));
        fs::write(
            store.path(),
            "entries:\n- id: 1\n  timestamp: a\n  duration: 10\n- id: two\n- id: 3\n  timestamp: b\n  duration: 5\n",
        )
        .unwrap();

        let ids: Vec<u64> = store.load().unwrap().entries.iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn non_mapping_document_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));
        fs::write(store.path(), "- just\n- a list\n").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = YamlFileStore::new(dir.path().join("timers.yaml"));
        fs::write(store.path(), "entries: [ {id: \n").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Parse { .. })));
    }
}

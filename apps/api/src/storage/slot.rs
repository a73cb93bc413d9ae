use std::marker::PhantomData;
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::storage::{KeyValueStore, StorageError};

/// A single named location in a `KeyValueStore` holding one JSON-encoded `T`.
///
/// Best-effort: a missing or unparseable value reads as the caller's default,
/// and failed writes are logged and dropped. Callers keep their in-memory copy
/// either way.
pub struct PersistentSlot<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _value: PhantomData<fn() -> T>,
}

impl<T> PersistentSlot<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        PersistentSlot {
            store,
            key: key.into(),
            _value: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn read_or(&self, default: T) -> T {
        match self.store.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!("Discarding malformed value in slot '{}': {e}", self.key);
                    default
                }
            },
            Ok(None) => {
                debug!("Slot '{}' is empty, using default", self.key);
                default
            }
            Err(e) => {
                warn!("Failed to read slot '{}': {e}", self.key);
                default
            }
        }
    }

    /// Overwrites the slot. Returns `false` when the value did not persist.
    pub fn write(&self, value: &T) -> bool {
        match self.try_write(value) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to persist slot '{}': {e}", self.key);
                false
            }
        }
    }

    fn try_write(&self, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(&self.key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{JobApplication, JobStatus, TrackerState};
    use crate::storage::memory::FailingStore;
    use crate::storage::{FileStore, MemoryStore};

    fn slot(store: Arc<dyn KeyValueStore>) -> PersistentSlot<TrackerState> {
        PersistentSlot::new(store, "job-tracker")
    }

    #[test]
    fn test_empty_slot_reads_default() {
        let s = slot(Arc::new(MemoryStore::new()));
        assert_eq!(s.read_or(TrackerState::default()), TrackerState::default());
    }

    #[test]
    fn test_malformed_value_reads_default() {
        let store = MemoryStore::with_value("job-tracker", "{not json");
        let s = slot(Arc::new(store));
        assert_eq!(s.read_or(TrackerState::default()), TrackerState::default());
    }

    #[test]
    fn test_structurally_incompatible_value_reads_default() {
        let store = MemoryStore::with_value("job-tracker", r#"{"target": "fifty"}"#);
        let s = slot(Arc::new(store));
        assert_eq!(s.read_or(TrackerState::default()), TrackerState::default());
    }

    #[test]
    fn test_round_trip_through_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let s = slot(Arc::new(FileStore::new(dir.path())));
        let state = TrackerState {
            target_job_count: 12,
            applied_job_count: 3,
            applications: vec![JobApplication {
                id: "a1".into(),
                company_name: "Acme".into(),
                job_title: "Engineer".into(),
                application_date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
                status: JobStatus::Interview,
                notes: "Second round booked".into(),
            }],
        };
        assert!(s.write(&state));

        let raw = std::fs::read_to_string(dir.path().join("job-tracker.json")).unwrap();
        assert!(raw.contains(r#""applicationDate":"2024-03-05""#), "{raw}");
        assert!(raw.contains(r#""status":"interview""#), "{raw}");

        let reopened = slot(Arc::new(FileStore::new(dir.path())));
        assert_eq!(reopened.read_or(TrackerState::default()), state);
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let s = slot(Arc::new(FailingStore { initial: None }));
        assert!(!s.write(&TrackerState::default()));
    }

    #[test]
    fn test_invalid_key_reads_default_and_fails_write() {
        let s: PersistentSlot<TrackerState> =
            PersistentSlot::new(Arc::new(MemoryStore::new()), "bad/key");
        assert_eq!(s.read_or(TrackerState::default()), TrackerState::default());
        assert!(!s.write(&TrackerState::default()));
    }
}

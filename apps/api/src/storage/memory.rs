use std::collections::HashMap;
use std::sync::RwLock;

use crate::storage::{validate_key, KeyValueStore, StorageError};

/// Process-local backend. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates a key, bypassing validation. Used to simulate whatever
    /// another session left behind.
    #[cfg(test)]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut slots) = store.slots.write() {
            slots.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let slots = self
            .slots
            .read()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut slots = self
            .slots
            .write()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_with_value_prepopulates() {
        let store = MemoryStore::with_value("job-tracker", "{}");
        assert_eq!(store.get("job-tracker").unwrap().as_deref(), Some("{}"));
    }
}

/// Backend whose writes always fail, standing in for a full or read-only disk.
#[cfg(test)]
pub(crate) struct FailingStore {
    pub initial: Option<String>,
}

#[cfg(test)]
impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.initial.clone())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }
}

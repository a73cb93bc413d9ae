//! Key-value storage capability and the typed slot built on top of it.
//!
//! The tracker only ever needs `get` and `set` on a single named slot, so the
//! backend trait stays that small. `FileStore` is the durable backend used by
//! the server; `MemoryStore` backs tests and ephemeral runs.

pub mod file;
pub mod memory;
pub mod slot;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use slot::PersistentSlot;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to replace slot file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous key-value capability. Every `set` fully overwrites the key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Keys become file names in `FileStore`, so they are limited to `[A-Za-z0-9_-]+`.
pub fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

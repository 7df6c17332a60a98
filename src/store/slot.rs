//! Persistent key-value slot port
//!
//! A slot is one named entry in a key-value store that holds an opaque byte
//! blob. The record store only ever talks to this trait, so the backing store
//! (SQLite in production, a map in tests) is chosen by whoever builds it.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Slot backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Slot lock poisoned")]
    LockPoisoned,
    #[error("Slot unavailable: {0}")]
    Unavailable(String),
}

/// Byte storage addressed by a string key.
pub trait Slot {
    /// Read the blob stored under `key`, or `None` if it was never written.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SlotError>;

    /// Store `value` under `key`, replacing whatever was there.
    fn write(&self, key: &str, value: &[u8]) -> Result<(), SlotError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), SlotError>;
}

/// In-process slot. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw bytes
    pub fn with_entry(key: &str, value: impl Into<Vec<u8>>) -> Self {
        let slot = Self::new();
        if let Ok(mut entries) = slot.entries.lock() {
            entries.insert(key.to_string(), value.into());
        }
        slot
    }
}

impl Slot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SlotError> {
        let entries = self.entries.lock().map_err(|_| SlotError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), SlotError> {
        let mut entries = self.entries.lock().map_err(|_| SlotError::LockPoisoned)?;
        entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        let mut entries = self.entries.lock().map_err(|_| SlotError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

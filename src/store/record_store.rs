//! Loads and flushes the record collection through a [`Slot`].

use thiserror::Error;

use super::slot::{Slot, SlotError};
use crate::data::Collection;

/// Slot key the collection is stored under unless configured otherwise
pub const DEFAULT_SLOT_KEY: &str = "people";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to decode saved records: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("Failed to encode records: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Slot error: {0}")]
    Slot(#[from] SlotError),
}

/// Reads and writes the whole collection as one JSON blob under a fixed key.
#[derive(Debug, Clone)]
pub struct RecordStore<S> {
    slot: S,
    key: String,
}

impl<S: Slot> RecordStore<S> {
    pub fn new(slot: S) -> Self {
        Self::with_key(slot, DEFAULT_SLOT_KEY)
    }

    pub fn with_key(slot: S, key: impl Into<String>) -> Self {
        Self {
            slot,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Load the saved collection.
    ///
    /// A slot that was never written yields an empty collection. A slot that
    /// cannot be read or decoded also yields an empty collection, after the
    /// failure is logged. The stored bytes are left as they are.
    pub fn load(&self) -> Collection {
        self.try_load().unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "Failed to load records");
            Collection::new()
        })
    }

    /// Load the saved collection, reporting read and decode failures.
    pub fn try_load(&self) -> Result<Collection, StoreError> {
        let Some(bytes) = self.slot.read(&self.key)? else {
            tracing::debug!(key = %self.key, "No saved records");
            return Ok(Collection::new());
        };

        let collection: Collection =
            serde_json::from_slice(&bytes).map_err(StoreError::Deserialize)?;
        tracing::debug!(key = %self.key, count = collection.len(), "Loaded records");
        Ok(collection)
    }

    /// Replace the saved collection with `collection`.
    ///
    /// Nothing is written unless encoding succeeds, so on failure the
    /// previously saved value stays in place.
    pub fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        let result = serde_json::to_vec(collection)
            .map_err(StoreError::Serialize)
            .and_then(|bytes| Ok(self.slot.write(&self.key, &bytes)?));

        match &result {
            Ok(()) => {
                tracing::debug!(key = %self.key, count = collection.len(), "Saved records")
            }
            Err(e) => tracing::warn!(key = %self.key, error = %e, "Failed to save records"),
        }
        result
    }
}

//! App state data access object (key-value store)

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::store::{Slot, SlotError};

/// SQLite-backed key-value store; the production [`Slot`].
#[derive(Clone)]
pub struct AppStateStore {
    conn: Arc<Mutex<Connection>>,
}

impl AppStateStore {
    /// Create a new AppStateStore
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, SlotError> {
        self.conn.lock().map_err(|_| SlotError::LockPoisoned)
    }

    /// Set a value (insert or update)
    pub fn set(&self, key: &str, value: &[u8]) -> Result<(), SlotError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO app_state (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Result<Option<Vec<u8>>, SlotError> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM app_state WHERE key = ?1",
                params![key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Delete a key
    pub fn delete(&self, key: &str) -> Result<(), SlotError> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM app_state WHERE key = ?1", params![key])?;
        Ok(())
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(e: rusqlite::Error) -> Self {
        SlotError::Backend(Box::new(e))
    }
}

impl Slot for AppStateStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, SlotError> {
        self.get(key)
    }

    fn write(&self, key: &str, value: &[u8]) -> Result<(), SlotError> {
        self.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), SlotError> {
        self.delete(key)
    }
}

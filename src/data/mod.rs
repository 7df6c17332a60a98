//! Data persistence layer for picroll
//!
//! This module provides the record model and the SQLite-backed key-value
//! store the record collection is persisted into.

mod app_state;
mod database;
mod migrations;
mod models;

pub use app_state::AppStateStore;
pub use database::{Database, DatabaseError};
pub use models::{Collection, Record, DEFAULT_DISPLAY_NAME};

//! Path utilities for picroll data directories

use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable that overrides the default data directory
pub const DATA_DIR_ENV: &str = "PICROLL_DATA_DIR";

/// Global storage for custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, falls back to `PICROLL_DATA_DIR`, then ~/.picroll.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    if DATA_DIR.set(path.clone()).is_err() {
        let existing = DATA_DIR
            .get()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::debug!(
            path = %path.display(),
            existing = %existing,
            "Data directory already initialized"
        );
    }
}

/// Get the default data directory path (~/.picroll)
fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .map(|h| h.join(".picroll"))
        .unwrap_or_else(|| PathBuf::from(".picroll"))
}

/// Get the base data directory.
/// Returns the custom path if set via init_data_dir(), otherwise the default.
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the database file path (~/.picroll/picroll.db)
pub fn database_path() -> PathBuf {
    data_dir().join("picroll.db")
}

/// Get the imported images directory (~/.picroll/images)
pub fn images_dir() -> PathBuf {
    data_dir().join("images")
}

/// Get the logs directory (~/.picroll/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the default log file path (~/.picroll/logs/picroll.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("picroll.log")
}

/// Get the config file path (~/.picroll/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

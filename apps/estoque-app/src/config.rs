//! Application configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use directories::ProjectDirs;
use serde::Serialize;
use std::env;
use std::path::PathBuf;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,estoque=debug,sqlx=warn";

/// Database file name inside the platform data directory.
const DB_FILE_NAME: &str = "estoque.db";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    /// SQLite database file
    pub database_path: PathBuf,

    /// Pool size (default: 5)
    pub max_connections: u32,

    /// Tracing filter directive
    pub log_filter: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn load_from<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match var("ESTOQUE_DB_PATH") {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            Some(_) => return Err(ConfigError::InvalidValue("ESTOQUE_DB_PATH".to_string())),
            None => default_database_path()?,
        };

        let max_connections: u32 = var("ESTOQUE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("ESTOQUE_MAX_CONNECTIONS".to_string()))?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "ESTOQUE_MAX_CONNECTIONS".to_string(),
            ));
        }

        let log_filter = var("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(AppConfig {
            database_path,
            max_connections,
            log_filter,
        })
    }
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.estoque.app/estoque.db`
/// - **Windows**: `%APPDATA%\estoque\app\data\estoque.db`
/// - **Linux**: `~/.local/share/app/estoque.db`
///
/// The directory itself is created at startup, not here.
fn default_database_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("com", "estoque", "app")
        .ok_or(ConfigError::NoDataDirectory)?;

    Ok(proj_dirs.data_dir().join(DB_FILE_NAME))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not determine app data directory")]
    NoDataDirectory,
}

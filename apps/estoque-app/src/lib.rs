//! # Estoque App Library
//!
//! Application layer for the Estoque inventory app: configuration,
//! startup, state and the commands the screens call.
//!
//! ## Module Organization
//! ```text
//! estoque_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Env-driven configuration
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   └── db.rs       ◄─── Database state wrapper
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── produto.rs  ◄─── Register/list/delete/reduce commands
//! │   └── report.rs   ◄─── Stock report command
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod state;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{AppConfig, ConfigError};
use error::ApiError;
use estoque_db::{Database, DbConfig, DbError};
use state::DbState;

/// Fatal startup failures.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not create data directory: {0}")]
    DataDir(#[from] std::io::Error),

    #[error("Database initialization failed: {0}")]
    Database(#[from] DbError),

    #[error("{0}")]
    Command(#[from] ApiError),

    #[error("Could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • ESTOQUE_DB_PATH, ESTOQUE_MAX_CONNECTIONS, RUST_LOG               │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode                                              │
/// │     • CREATE TABLE IF NOT EXISTS cadastro (failure is fatal)            │
/// │                                                                         │
/// │  4. Stock Report ─────────────────────────────────────────────────────► │
/// │     • Current inventory written to stdout as JSON                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), StartupError> {
    let config = AppConfig::load()?;

    init_tracing(&config.log_filter);

    info!("Starting Estoque");

    let db_state = open_database(&config).await?;
    info!("Database connected and schema ready");

    let report = commands::report::stock_report(&db_state).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    db_state.inner().close().await;
    Ok(())
}

/// Opens the database described by `config` and wraps it as state.
///
/// The parent directory of the database file is created if missing.
pub async fn open_database(config: &AppConfig) -> Result<DbState, StartupError> {
    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    info!(db_path = ?config.database_path, "Database path determined");

    let db_config =
        DbConfig::new(&config.database_path).max_connections(config.max_connections);

    let db = Database::new(db_config).await.map_err(|e| {
        error!(error = %e, "Database initialization failed");
        e
    })?;

    Ok(DbState::new(db))
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=estoque=trace` - Show trace for estoque crates only
/// - Default: `info,estoque=debug,sqlx=warn`
fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    // A subscriber may already be installed (tests, embedding hosts).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_at(database_path: std::path::PathBuf) -> AppConfig {
        AppConfig {
            database_path,
            max_connections: 2,
            log_filter: config::DEFAULT_LOG_FILTER.to_string(),
        }
    }

    #[tokio::test]
    async fn test_open_database_creates_parent_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_at(dir.path().join("nested").join("estoque.db"));

        let db = open_database(&config).await.unwrap();
        assert!(db.inner().health_check().await);
        assert!(config.database_path.exists());

        db.inner().close().await;
    }

    #[tokio::test]
    async fn test_open_database_fails_on_unusable_path() {
        let dir = tempfile::tempdir().unwrap();

        // A directory cannot be opened as a database file.
        let config = config_at(dir.path().to_path_buf());

        assert!(matches!(
            open_database(&config).await,
            Err(StartupError::Database(_))
        ));
    }
}

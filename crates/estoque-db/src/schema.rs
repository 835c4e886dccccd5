//! # Database Schema
//!
//! The single `cadastro` table holding every product.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Initialization                              │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS cadastro (...)                             │
//! │       │                                                                 │
//! │       ├── Table exists? No-op                                          │
//! │       ├── Table missing? Created                                       │
//! │       └── Engine error? Startup fails                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  App continues startup                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table name and column names are kept as-is so existing device
//! databases open without conversion. There are no versioned migrations.

use sqlx::SqlitePool;
use tracing::{error, info};

use crate::error::{DbError, DbResult};

/// Name of the products table.
pub const PRODUTOS_TABLE: &str = "cadastro";

/// DDL for the products table.
///
/// `preco_unidade` is the unit purchase cost: `precoCompra` on the
/// registration form, `precoUnit` on the stock screen.
pub const CREATE_PRODUTOS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS cadastro (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nome TEXT NOT NULL,
    quantidade INTEGER NOT NULL,
    preco_unidade REAL NOT NULL,
    descricao TEXT NOT NULL,
    codigo TEXT NOT NULL
)
"#;

/// Ensures the schema exists.
///
/// ## Safety
/// - Idempotent: safe to run multiple times
/// - Never drops or alters existing data
pub async fn init_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Initializing database schema");

    sqlx::query(CREATE_PRODUTOS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Schema initialization failed");
            DbError::SchemaFailed(e.to_string())
        })?;

    info!("Database schema ready");
    Ok(())
}

/// Returns whether the products table exists (diagnostics).
pub async fn produtos_table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
    )
    .bind(PRODUTOS_TABLE)
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}

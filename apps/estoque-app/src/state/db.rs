//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! ## Thread Safety
//! The `Database` from `estoque-db` holds a `SqlitePool` and the stock
//! reduction lock, both shareable across tasks. Commands may run
//! concurrently; reductions on the same handle are serialized inside the
//! repository.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! async fn list_produtos(db: &DbState) -> Result<Vec<EstoqueItemDto>, ApiError> {
//!     let items = db.inner().produtos().list_all().await?;
//!     Ok(items.into_iter().map(EstoqueItemDto::from).collect())
//! }
//! ```

use estoque_db::Database;

/// Owner of the `Database` handle for the lifetime of the app.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}

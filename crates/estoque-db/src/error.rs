//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in estoque-app) ← Code + user-facing message                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use estoque_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - Deleting an id that does not exist
    /// - Reducing stock of an id that does not exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A stock reduction would leave the quantity below zero.
    /// Nothing was written.
    #[error("Insufficient stock for product {id}: available {available}, requested {requested}")]
    InsufficientStock {
        id: i64,
        available: i64,
        requested: i64,
    },

    /// The UPDATE of a stock reduction touched no rows.
    ///
    /// ## When This Occurs
    /// The row vanished between the read and the write of the transaction.
    #[error("Update affected no rows for product {id}")]
    NoRowsAffected { id: i64 },

    /// Input rejected before reaching the database.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Schema creation failed.
    #[error("Schema initialization failed: {0}")]
    SchemaFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Transaction failed to begin, commit or roll back.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Whether the error is a storage failure rather than a domain outcome.
    ///
    /// Storage failures are shown to the user generically and logged;
    /// the rest carry a message the user can act on.
    pub fn is_storage(&self) -> bool {
        !matches!(
            self,
            DbError::NotFound { .. }
                | DbError::InsufficientStock { .. }
                | DbError::NoRowsAffected { .. }
                | DbError::Validation(_)
        )
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed (engine message kept)
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
///
/// Missing rows never arrive here: lookups use `fetch_optional` and turn
/// `None` into [`DbError::NotFound`] with the real id.
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DbError::not_found("Produto", 42);
        assert_eq!(err.to_string(), "Produto not found: 42");

        let err = DbError::InsufficientStock {
            id: 3,
            available: 2,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 3: available 2, requested 5"
        );
    }

    #[test]
    fn test_storage_classification() {
        assert!(!DbError::not_found("Produto", 1).is_storage());
        assert!(!DbError::NoRowsAffected { id: 1 }.is_storage());
        assert!(DbError::QueryFailed("disk I/O error".to_string()).is_storage());
        assert!(DbError::PoolExhausted.is_storage());
    }

    #[test]
    fn test_sqlx_error_mapping() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));

        let err: DbError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, DbError::ConnectionFailed(_)));

        // Only the repository knows which id was missing.
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Internal(_)));
        assert!(err.is_storage());
    }
}

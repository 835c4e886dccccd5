//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Estoque                                │
//! │                                                                         │
//! │  Screen calls register_produto(form)                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function → Result<T, ApiError>                          │  │
//! │  │                                                                  │  │
//! │  │  CoreError::Parse       ──► PARSE_ERROR        (user fixes form) │  │
//! │  │  CoreError::Validation  ──► VALIDATION_ERROR   (user fixes form) │  │
//! │  │  DbError::NotFound      ──► NOT_FOUND                            │  │
//! │  │  DbError::InsufficientStock ──► INSUFFICIENT_STOCK               │  │
//! │  │  DbError::<storage>     ──► DATABASE_ERROR (logged, generic msg) │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Screen shows `message`, branches on `code`. No automatic retries.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::error;

use estoque_core::{CoreError, ParseError, ValidationError};
use estoque_db::DbError;

/// API error returned from commands.
///
/// ```json
/// {
///   "code": "INSUFFICIENT_STOCK",
///   "message": "Only 3 in stock, cannot remove 5",
///   "field": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Form field to highlight, when the error is about one field
    pub field: Option<String>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id does not exist
    NotFound,

    /// Produto invariant violated
    ValidationError,

    /// Numeric form field unreadable
    ParseError,

    /// Reduction larger than stock
    InsufficientStock,

    /// Storage engine failure
    DatabaseError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Attaches the offending form field.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        ApiError::new(ErrorCode::ValidationError, err.to_string()).with_field(field)
    }
}

impl From<ParseError> for ApiError {
    fn from(err: ParseError) -> Self {
        let field = match &err {
            ParseError::InvalidInteger { field, .. }
            | ParseError::InvalidNumber { field, .. }
            | ParseError::NotFinite { field, .. } => field.clone(),
        };
        ApiError::new(ErrorCode::ParseError, err.to_string()).with_field(field)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Parse(e) => e.into(),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Converts database errors to API errors.
///
/// Storage failures are logged in full and reported generically.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        if err.is_storage() {
            error!(error = %err, "Database failure");
        }

        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::InsufficientStock {
                available,
                requested,
                ..
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!("Only {} in stock, cannot remove {}", available, requested),
            ),
            DbError::NoRowsAffected { id } => ApiError::new(
                ErrorCode::NotFound,
                format!("Produto {} was not updated; it may have been deleted", id),
            ),
            DbError::Validation(e) => e.into(),
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::SchemaFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database initialization failed")
            }
            DbError::TransactionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database transaction failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database is busy, try again")
            }
            DbError::QueryFailed(_) | DbError::Internal(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

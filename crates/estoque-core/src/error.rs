//! # Error Types
//!
//! Domain-specific error types for estoque-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  estoque-core errors (this file)                                       │
//! │  ├── CoreError        - Everything the form controller can report      │
//! │  ├── ParseError       - Numeric text that could not be parsed          │
//! │  └── ValidationError  - Produto invariant violations                   │
//! │                                                                         │
//! │  estoque-db errors (separate crate)                                    │
//! │  └── DbError          - Storage, not found, insufficient stock         │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the screens see (code + message)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Parse errors are reported before validation runs, so a form with an
//! unreadable price never reaches the invariant checks.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors produced while turning user input into a [`crate::Produto`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// Numeric form field could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Parsed candidate violates a Produto invariant.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Parse Error
// =============================================================================

/// Text that could not be read as the expected numeric type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Field is not a base-10 integer.
    #[error("{field} must be a whole number, got '{value}'")]
    InvalidInteger { field: String, value: String },

    /// Field is not a decimal number.
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Field parsed to NaN or infinity.
    #[error("{field} must be a finite number, got '{value}'")]
    NotFinite { field: String, value: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Produto invariant violations.
///
/// Each variant names the offending field so the registration screen can
/// highlight it instead of showing one generic message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value must be a finite number.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },
}

impl ValidationError {
    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::Negative { field }
            | ValidationError::NotFinite { field } => field,
        }
    }
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "nome".to_string(),
        };
        assert_eq!(err.to_string(), "nome is required");

        let err = ValidationError::Negative {
            field: "quantidade".to_string(),
        };
        assert_eq!(err.to_string(), "quantidade must not be negative");
        assert_eq!(err.field(), "quantidade");
    }

    #[test]
    fn test_parse_error_message() {
        let err = ParseError::InvalidNumber {
            field: "precoCompra".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "precoCompra must be a number, got 'abc'");
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core_err: CoreError = ValidationError::Required {
            field: "codigo".to_string(),
        }
        .into();
        assert!(matches!(core_err, CoreError::Validation(_)));

        let core_err: CoreError = ParseError::InvalidInteger {
            field: "quantidade".to_string(),
            value: "x".to_string(),
        }
        .into();
        assert!(matches!(core_err, CoreError::Parse(_)));
    }
}

//! # Validation Module
//!
//! Field-level rules behind [`crate::Produto::validate`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Controller (controller.rs)                                   │
//! │  └── Text → numbers (ParseError on failure)                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Produto invariants (ValidationError on failure)                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use estoque_core::validation::{validate_codigo, validate_quantidade};
//!
//! assert!(validate_codigo("ACAI01").is_ok());
//! assert!(validate_quantidade(-5).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field names as the registration form knows them.
pub mod fields {
    pub const NOME: &str = "nome";
    pub const QUANTIDADE: &str = "quantidade";
    pub const PRECO_COMPRA: &str = "precoCompra";
    pub const CODIGO: &str = "codigo";
    pub const AMOUNT: &str = "amount";
}

// =============================================================================
// String Validators
// =============================================================================

fn require_non_blank(value: &str, field: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
///
/// ## Example
/// ```rust
/// use estoque_core::validation::validate_nome;
///
/// assert!(validate_nome("Açaí").is_ok());
/// assert!(validate_nome("").is_err());
/// ```
pub fn validate_nome(nome: &str) -> ValidationResult<()> {
    require_non_blank(nome, fields::NOME)
}

/// Validates a product code. Whitespace-only codes are rejected.
pub fn validate_codigo(codigo: &str) -> ValidationResult<()> {
    require_non_blank(codigo, fields::CODIGO)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a stock quantity. Zero is allowed (item out of stock).
pub fn validate_quantidade(quantidade: i64) -> ValidationResult<()> {
    if quantidade < 0 {
        return Err(ValidationError::Negative {
            field: fields::QUANTIDADE.to_string(),
        });
    }
    Ok(())
}

/// Validates a unit purchase price.
///
/// ## Rules
/// - Must be finite (NaN and infinity are rejected)
/// - Must be non-negative (>= 0); zero is allowed
///
/// ## Example
/// ```rust
/// use estoque_core::validation::validate_preco;
///
/// assert!(validate_preco(5.50).is_ok());
/// assert!(validate_preco(0.0).is_ok());
/// assert!(validate_preco(-10.0).is_err());
/// assert!(validate_preco(f64::NAN).is_err());
/// ```
pub fn validate_preco(preco: f64) -> ValidationResult<()> {
    // NaN compares false against everything, so check it before the sign.
    if !preco.is_finite() {
        return Err(ValidationError::NotFinite {
            field: fields::PRECO_COMPRA.to_string(),
        });
    }

    if preco < 0.0 {
        return Err(ValidationError::Negative {
            field: fields::PRECO_COMPRA.to_string(),
        });
    }

    Ok(())
}

/// Validates the amount passed to a stock reduction.
///
/// A negative amount would silently add stock, so it is rejected here
/// before any transaction is opened. Zero is a no-op reduction.
pub fn validate_reduction_amount(amount: i64) -> ValidationResult<()> {
    if amount < 0 {
        return Err(ValidationError::Negative {
            field: fields::AMOUNT.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_nome() {
        assert!(validate_nome("Granola").is_ok());
        assert!(validate_nome("").is_err());
        assert!(validate_nome("   ").is_err());
    }

    #[test]
    fn test_validate_codigo() {
        assert!(validate_codigo("1235813213455").is_ok());
        assert_eq!(
            validate_codigo("  "),
            Err(ValidationError::Required {
                field: "codigo".to_string()
            })
        );
    }

    #[test]
    fn test_validate_quantidade() {
        assert!(validate_quantidade(0).is_ok());
        assert!(validate_quantidade(400).is_ok());
        assert!(validate_quantidade(-1).is_err());
    }

    #[test]
    fn test_validate_preco() {
        assert!(validate_preco(0.0).is_ok());
        assert!(validate_preco(16.99).is_ok());
        assert!(validate_preco(-0.01).is_err());
        assert!(matches!(
            validate_preco(f64::NAN),
            Err(ValidationError::NotFinite { .. })
        ));
        assert!(validate_preco(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_reduction_amount() {
        assert!(validate_reduction_amount(0).is_ok());
        assert!(validate_reduction_amount(3).is_ok());
        assert!(validate_reduction_amount(-3).is_err());
    }
}

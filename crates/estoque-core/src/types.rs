//! # Domain Types
//!
//! Core domain types used throughout Estoque.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐            ┌─────────────────────┐            │
//! │  │      Produto        │  insert    │    EstoqueItem      │            │
//! │  │  ─────────────────  │ ─────────► │  ─────────────────  │            │
//! │  │  nome               │            │  id (store-assigned)│            │
//! │  │  quantidade         │            │  nome               │            │
//! │  │  preco_compra       │            │  quantidade         │            │
//! │  │  descricao          │            │  preco_unit         │            │
//! │  │  codigo             │            │  descricao, codigo  │            │
//! │  └─────────────────────┘            └─────────────────────┘            │
//! │     (write shape)                      (read shape)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Write/Read Naming
//! The unit cost is called `precoCompra` when a product is registered and
//! `precoUnit` when stock is listed. Both map to the `preco_unidade` column.
//! The two shapes are kept apart so the screens keep their field names.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{
    validate_codigo, validate_nome, validate_preco, validate_quantidade, ValidationResult,
};

// =============================================================================
// Produto
// =============================================================================

/// A product as entered on the registration screen, before it is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Produto {
    /// Display name. Must not be blank.
    pub nome: String,

    /// Units in stock. Never negative.
    pub quantidade: i64,

    /// Unit purchase cost. Never negative.
    pub preco_compra: f64,

    /// Free-form description.
    pub descricao: String,

    /// Product code (barcode or internal code). Must not be blank.
    pub codigo: String,
}

impl Produto {
    /// Creates a product from already-parsed values. Does not validate.
    pub fn new(
        nome: impl Into<String>,
        quantidade: i64,
        preco_compra: f64,
        descricao: impl Into<String>,
        codigo: impl Into<String>,
    ) -> Self {
        Produto {
            nome: nome.into(),
            quantidade,
            preco_compra,
            descricao: descricao.into(),
            codigo: codigo.into(),
        }
    }

    /// Checks every invariant and reports the first field that fails.
    ///
    /// ## Rules
    /// - `nome` not blank
    /// - `quantidade >= 0`
    /// - `preco_compra >= 0` and finite
    /// - `codigo` not blank
    ///
    /// ## Example
    /// ```rust
    /// use estoque_core::Produto;
    ///
    /// let produto = Produto::new("Açaí", 10, 5.50, "Açaí congelado", "ACAI01");
    /// assert!(produto.validate().is_ok());
    ///
    /// let sem_nome = Produto::new("", 10, 5.50, "", "ACAI01");
    /// assert!(sem_nome.validate().is_err());
    /// ```
    pub fn validate(&self) -> ValidationResult<()> {
        validate_nome(&self.nome)?;
        validate_quantidade(self.quantidade)?;
        validate_preco(self.preco_compra)?;
        validate_codigo(&self.codigo)?;
        Ok(())
    }

    /// Boolean form of [`Produto::validate`].
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Total value of this line of stock: `quantidade * preco_compra`.
    ///
    /// Non-negativity is only guaranteed for validated products.
    #[inline]
    pub fn total_stock_value(&self) -> f64 {
        self.quantidade as f64 * self.preco_compra
    }
}

// =============================================================================
// EstoqueItem
// =============================================================================

/// A stored product, as shown on the stock screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EstoqueItem {
    /// Identifier assigned by the store on insert.
    pub id: i64,
    pub nome: String,
    pub quantidade: i64,
    /// Unit purchase cost (`preco_unidade` column).
    pub preco_unit: f64,
    pub descricao: String,
    pub codigo: String,
}

impl EstoqueItem {
    /// Total value of this line of stock: `quantidade * preco_unit`.
    #[inline]
    pub fn total_stock_value(&self) -> f64 {
        self.quantidade as f64 * self.preco_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn produto_valido() -> Produto {
        Produto::new("Produto Válido", 1, 10.0, "...", "PV01")
    }

    #[test]
    fn test_total_stock_value() {
        let produto = Produto::new("Açaí", 10, 5.50, "Açaí congelado", "ACAI01");
        assert_eq!(produto.total_stock_value(), 55.0);
    }

    #[test]
    fn test_total_stock_value_zero_quantity() {
        let produto = Produto::new("Granola", 0, 12.5, "", "GRA01");
        assert_eq!(produto.total_stock_value(), 0.0);
    }

    #[test]
    fn test_valid_produto() {
        assert!(produto_valido().is_valid());
    }

    #[test]
    fn test_empty_nome_is_invalid() {
        let produto = Produto {
            nome: String::new(),
            codigo: "PI01".to_string(),
            ..produto_valido()
        };
        assert!(!produto.is_valid());
        assert_eq!(
            produto.validate(),
            Err(ValidationError::Required {
                field: "nome".to_string()
            })
        );
    }

    #[test]
    fn test_negative_quantidade_is_invalid() {
        let produto = Produto {
            quantidade: -5,
            ..produto_valido()
        };
        assert!(!produto.is_valid());
    }

    #[test]
    fn test_negative_preco_is_invalid() {
        let produto = Produto {
            preco_compra: -10.0,
            ..produto_valido()
        };
        assert!(!produto.is_valid());
    }

    #[test]
    fn test_whitespace_codigo_is_invalid() {
        let produto = Produto {
            codigo: "  ".to_string(),
            ..produto_valido()
        };
        assert!(!produto.is_valid());
    }

    #[test]
    fn test_nan_preco_is_invalid() {
        let produto = Produto {
            preco_compra: f64::NAN,
            ..produto_valido()
        };
        assert!(!produto.is_valid());
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(produto_valido()).unwrap();
        assert!(json.get("precoCompra").is_some());

        let item = EstoqueItem {
            id: 7,
            nome: "Banana".to_string(),
            quantidade: 50,
            preco_unit: 1.2,
            descricao: String::new(),
            codigo: "333333333".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["precoUnit"], 1.2);
        assert!(json.get("precoCompra").is_none());
    }
}

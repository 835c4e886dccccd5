//! # Form Controller
//!
//! Turns the raw text of the registration form into a validated [`Produto`].
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Registration screen                                                    │
//! │  nome="Açaí" quantidade="10" precoCompra="5,50" codigo="ACAI01"        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build_produto(&form) ← THIS MODULE                                    │
//! │       │                                                                 │
//! │       ├── "10"   → 10     (digits only)                                │
//! │       ├── "5,50" → 5.5    (comma accepted as decimal separator)        │
//! │       │      └── unreadable? → ParseError                              │
//! │       │                                                                 │
//! │       ├── Produto::validate()                                          │
//! │       │      └── invariant broken? → ValidationError                   │
//! │       │                                                                 │
//! │       └── Ok(Produto) → ProdutoRepository::insert                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ParseError};
use crate::types::Produto;
use crate::validation::fields;

/// Raw registration form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProdutoForm {
    pub nome: String,
    pub quantidade: String,
    pub preco_compra: String,
    pub descricao: String,
    pub codigo: String,
}

/// Parses and validates a registration form.
///
/// `nome` and `codigo` are stored trimmed; `descricao` is kept as typed.
///
/// ## Example
/// ```rust
/// use estoque_core::controller::{build_produto, ProdutoForm};
///
/// let form = ProdutoForm {
///     nome: "Açaí".into(),
///     quantidade: "10".into(),
///     preco_compra: "5,50".into(),
///     descricao: "Açaí congelado".into(),
///     codigo: "ACAI01".into(),
/// };
/// let produto = build_produto(&form).unwrap();
/// assert_eq!(produto.preco_compra, 5.5);
/// ```
pub fn build_produto(form: &ProdutoForm) -> CoreResult<Produto> {
    let quantidade = parse_quantidade(&form.quantidade)?;
    let preco_compra = parse_preco(&form.preco_compra)?;

    let produto = Produto::new(
        form.nome.trim(),
        quantidade,
        preco_compra,
        form.descricao.as_str(),
        form.codigo.trim(),
    );

    produto.validate()?;
    Ok(produto)
}

/// Quantity text: digits only.
static QUANTIDADE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("quantidade pattern is valid"));

/// Price text: digits, optionally one `.` or `,` followed by more digits.
static PRECO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+([.,]\d+)?$").expect("preco pattern is valid"));

/// Parses a quantity. Surrounding whitespace is ignored; what remains must be
/// plain digits, so signs, decimals and exponents are rejected.
pub fn parse_quantidade(text: &str) -> Result<i64, ParseError> {
    let invalid = || ParseError::InvalidInteger {
        field: fields::QUANTIDADE.to_string(),
        value: text.to_string(),
    };

    let trimmed = text.trim();
    if !QUANTIDADE_PATTERN.is_match(trimmed) {
        return Err(invalid());
    }

    // Digits only, so the sole failure left is overflow.
    trimmed.parse::<i64>().map_err(|_| invalid())
}

/// Parses a price, accepting `.` or `,` as the decimal separator.
///
/// The trimmed text must be digits with at most one separator followed by
/// digits: `"5"`, `"5.50"`, `"16,99"`. Signs, exponents, `"NaN"`, `".5"` and
/// `"5."` are rejected.
pub fn parse_preco(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if !PRECO_PATTERN.is_match(trimmed) {
        return Err(ParseError::InvalidNumber {
            field: fields::PRECO_COMPRA.to_string(),
            value: text.to_string(),
        });
    }

    let preco = trimmed
        .replacen(',', ".", 1)
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            field: fields::PRECO_COMPRA.to_string(),
            value: text.to_string(),
        })?;

    // A long enough digit string overflows to infinity.
    if !preco.is_finite() {
        return Err(ParseError::NotFinite {
            field: fields::PRECO_COMPRA.to_string(),
            value: text.to_string(),
        });
    }

    Ok(preco)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn form() -> ProdutoForm {
        ProdutoForm {
            nome: "Calda Morango".to_string(),
            quantidade: "20".to_string(),
            preco_compra: "19.2".to_string(),
            descricao: "Desc 2".to_string(),
            codigo: "1235813213455".to_string(),
        }
    }

    #[test]
    fn test_build_valid_form() {
        let produto = build_produto(&form()).unwrap();
        assert_eq!(produto.nome, "Calda Morango");
        assert_eq!(produto.quantidade, 20);
        assert_eq!(produto.preco_compra, 19.2);
        assert_eq!(produto.codigo, "1235813213455");
    }

    #[test]
    fn test_comma_decimal_separator() {
        let form = ProdutoForm {
            preco_compra: "16,99".to_string(),
            ..form()
        };
        assert_eq!(build_produto(&form).unwrap().preco_compra, 16.99);
    }

    #[test]
    fn test_trims_nome_and_codigo() {
        let form = ProdutoForm {
            nome: "  Granola ".to_string(),
            codigo: " GRA01 ".to_string(),
            quantidade: " 15 ".to_string(),
            ..form()
        };
        let produto = build_produto(&form).unwrap();
        assert_eq!(produto.nome, "Granola");
        assert_eq!(produto.codigo, "GRA01");
        assert_eq!(produto.quantidade, 15);
    }

    #[test]
    fn test_unparseable_quantidade() {
        let form = ProdutoForm {
            quantidade: "dez".to_string(),
            ..form()
        };
        assert!(matches!(
            build_produto(&form),
            Err(CoreError::Parse(ParseError::InvalidInteger { .. }))
        ));
    }

    #[test]
    fn test_fractional_quantidade_is_rejected() {
        assert!(parse_quantidade("2.5").is_err());
    }

    #[test]
    fn test_nan_preco_is_rejected() {
        assert!(matches!(
            parse_preco("NaN"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_preco("abc"),
            Err(ParseError::InvalidNumber { .. })
        ));
        assert!(parse_preco("1,234,5").is_err());
    }

    #[test]
    fn test_preco_overflow_is_not_finite() {
        let huge = "9".repeat(400);
        assert!(matches!(
            parse_preco(&huge),
            Err(ParseError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_preco_accepts_only_plain_decimals() {
        assert_eq!(parse_preco("5").unwrap(), 5.0);
        assert_eq!(parse_preco("5.50").unwrap(), 5.5);
        assert_eq!(parse_preco(" 16,99 ").unwrap(), 16.99);

        for text in ["1e3", ".5", "5.", "+5", "-5", "5,", ",5", "1.2.3", "inf", "5 0", ""] {
            assert!(
                matches!(parse_preco(text), Err(ParseError::InvalidNumber { .. })),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn test_quantidade_accepts_only_digits() {
        assert_eq!(parse_quantidade("007").unwrap(), 7);
        assert_eq!(parse_quantidade(" 15 ").unwrap(), 15);

        for text in ["+5", "-5", "1e3", "2.5", "5,0", "", "   "] {
            assert!(
                matches!(parse_quantidade(text), Err(ParseError::InvalidInteger { .. })),
                "accepted {text:?}"
            );
        }

        // Digits, but past i64::MAX.
        assert!(parse_quantidade("99999999999999999999").is_err());
    }

    #[test]
    fn test_parse_errors_come_before_validation() {
        // Blank name AND bad quantity: the parse failure is what gets reported.
        let form = ProdutoForm {
            nome: String::new(),
            quantidade: "x".to_string(),
            ..form()
        };
        assert!(matches!(build_produto(&form), Err(CoreError::Parse(_))));
    }

    #[test]
    fn test_signed_values_are_parse_errors() {
        let quantidade_negativa = ProdutoForm {
            quantidade: "-5".to_string(),
            ..form()
        };
        assert!(matches!(
            build_produto(&quantidade_negativa),
            Err(CoreError::Parse(ParseError::InvalidInteger { .. }))
        ));

        let preco_negativo = ProdutoForm {
            preco_compra: "-10".to_string(),
            ..form()
        };
        assert!(matches!(
            build_produto(&preco_negativo),
            Err(CoreError::Parse(ParseError::InvalidNumber { .. }))
        ));
    }

    #[test]
    fn test_blank_codigo_fails_validation() {
        let form = ProdutoForm {
            codigo: "   ".to_string(),
            ..form()
        };
        assert!(matches!(
            build_produto(&form),
            Err(CoreError::Validation(ValidationError::Required { .. }))
        ));
    }
}

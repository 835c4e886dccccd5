//! # Produto Commands
//!
//! Commands behind the registration form and the stock screen.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Register Produto Flow                                │
//! │                                                                         │
//! │  User fills the form: "Açaí", "400", "16,99", "", "1235813213455"       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  register_produto(db, form)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  build_produto: parse numbers ──► validate ──► Produto                 │
//! │       │             │                  │                                │
//! │       │             └─ PARSE_ERROR     └─ VALIDATION_ERROR              │
//! │       ▼                                                                 │
//! │  ProdutoRepository::insert ──► new id                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::DbState;
use estoque_core::{build_produto, EstoqueItem, ProdutoForm};

/// Stock screen row sent to the UI.
///
/// The unit cost is named `precoUnit` here, matching the stock screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstoqueItemDto {
    pub id: i64,
    pub nome: String,
    pub quantidade: i64,
    pub preco_unit: f64,
    pub descricao: String,
    pub codigo: String,
    /// `quantidade * preco_unit`, precomputed for display.
    pub valor_total: f64,
}

impl From<EstoqueItem> for EstoqueItemDto {
    fn from(item: EstoqueItem) -> Self {
        let valor_total = item.total_stock_value();
        EstoqueItemDto {
            id: item.id,
            nome: item.nome,
            quantidade: item.quantidade,
            preco_unit: item.preco_unit,
            descricao: item.descricao,
            codigo: item.codigo,
            valor_total,
        }
    }
}

/// Registers a product from raw form input.
///
/// ## Arguments
/// * `db` - Database state
/// * `form` - Text exactly as typed; numbers may use a comma separator
///
/// ## Returns
/// * `Ok(i64)` - Id assigned by storage
/// * `Err(ApiError)` - PARSE_ERROR or VALIDATION_ERROR with the offending
///   field; nothing is stored in that case
pub async fn register_produto(db: &DbState, form: ProdutoForm) -> Result<i64, ApiError> {
    debug!(nome = %form.nome, "register_produto command");

    let produto = build_produto(&form).map_err(|e| {
        warn!(error = %e, "Registration rejected");
        ApiError::from(e)
    })?;

    let id = db.inner().produtos().insert(&produto).await?;

    info!(id = id, nome = %produto.nome, "Produto registered");
    Ok(id)
}

/// Lists every stored product for the stock screen, ordered by id.
pub async fn list_produtos(db: &DbState) -> Result<Vec<EstoqueItemDto>, ApiError> {
    debug!("list_produtos command");

    let items = db.inner().produtos().list_all().await?;

    debug!(count = items.len(), "Produtos listed");
    Ok(items.into_iter().map(EstoqueItemDto::from).collect())
}

/// Deletes a product by id.
///
/// ## Returns
/// * `Ok(())` - Row removed
/// * `Err(ApiError)` - NOT_FOUND if the id does not exist
pub async fn delete_produto(db: &DbState, id: i64) -> Result<(), ApiError> {
    debug!(id = id, "delete_produto command");

    db.inner().produtos().delete_by_id(id).await?;

    info!(id = id, "Produto deleted");
    Ok(())
}

/// Removes `amount` units from a product's stock.
///
/// ## Returns
/// * `Ok(i64)` - Remaining quantity
/// * `Err(ApiError)` - NOT_FOUND, VALIDATION_ERROR (negative amount) or
///   INSUFFICIENT_STOCK; the stored quantity is unchanged on any error
pub async fn reduce_stock(db: &DbState, id: i64, amount: i64) -> Result<i64, ApiError> {
    debug!(id = id, amount = amount, "reduce_stock command");

    let remaining = db.inner().produtos().reduce_quantity(id, amount).await?;

    info!(id = id, amount = amount, remaining = remaining, "Stock reduced");
    Ok(remaining)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use estoque_db::{Database, DbConfig};

    async fn state() -> DbState {
        DbState::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }

    fn form(nome: &str, quantidade: &str, preco: &str) -> ProdutoForm {
        ProdutoForm {
            nome: nome.to_string(),
            quantidade: quantidade.to_string(),
            preco_compra: preco.to_string(),
            descricao: String::new(),
            codigo: "7891234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_and_list() {
        let db = state().await;

        let id = register_produto(&db, form("Açaí", "400", "16,99"))
            .await
            .unwrap();

        let items = list_produtos(&db).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].nome, "Açaí");
        assert_eq!(items[0].quantidade, 400);
        assert!((items[0].preco_unit - 16.99).abs() < 1e-9);
        assert!((items[0].valor_total - 6796.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_register_rejects_bad_input() {
        let db = state().await;

        let err = register_produto(&db, form("", "10", "5")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.field.as_deref(), Some("nome"));

        let err = register_produto(&db, form("Granola", "dez", "5"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);
        assert_eq!(err.field.as_deref(), Some("quantidade"));

        let err = register_produto(&db, form("Granola", "10", "-1"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);
        assert_eq!(err.field.as_deref(), Some("precoCompra"));

        let err = register_produto(&db, form("Granola", "10", "1e3"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ParseError);

        assert!(list_produtos(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let db = state().await;
        let id = register_produto(&db, form("Banana", "50", "1,20"))
            .await
            .unwrap();

        delete_produto(&db, id).await.unwrap();
        assert!(list_produtos(&db).await.unwrap().is_empty());

        let err = delete_produto(&db, id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_reduce_stock() {
        let db = state().await;
        let id = register_produto(&db, form("Morango", "10", "6"))
            .await
            .unwrap();

        assert_eq!(reduce_stock(&db, id, 4).await.unwrap(), 6);

        let err = reduce_stock(&db, id, 7).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err = reduce_stock(&db, id, -1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = reduce_stock(&db, id + 100, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let items = list_produtos(&db).await.unwrap();
        assert_eq!(items[0].quantidade, 6);
    }

    #[test]
    fn test_dto_field_names() {
        let dto = EstoqueItemDto::from(EstoqueItem {
            id: 1,
            nome: "Copo".to_string(),
            quantidade: 2,
            preco_unit: 0.5,
            descricao: String::new(),
            codigo: "1".to_string(),
        });

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["precoUnit"], 0.5);
        assert_eq!(json["valorTotal"], 1.0);
        assert!(json.get("precoCompra").is_none());
    }
}

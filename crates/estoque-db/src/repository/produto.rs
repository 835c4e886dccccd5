//! # Produto Repository
//!
//! Database operations for the `cadastro` table.
//!
//! ## Key Operations
//! - Insert, list, delete
//! - Guarded stock reduction (read-check-write in one transaction)
//!
//! ## Stock Reduction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    reduce_quantity(id, amount)                          │
//! │                                                                         │
//! │  Start ── lock ── BEGIN IMMEDIATE                                      │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  Read     SELECT quantidade ──── no row ──────────────┐                │
//! │                     │                                 │                │
//! │                     ▼                                 │                │
//! │  Check    current - amount < 0 ── yes ────────────────┤                │
//! │                     │                                 │                │
//! │                     ▼                                 ▼                │
//! │  Write    UPDATE ... ── 0 rows ──────────────────► ROLLBACK (Aborted)  │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │  COMMIT (Committed)                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The in-process lock keeps two reducers of one `Database` apart. The
//! IMMEDIATE transaction holds SQLite's write lock from the read to the
//! commit, so no other writer can change the row in between, and a failed
//! step leaves no partial write.

use std::sync::Arc;

use sqlx::{Sqlite, SqlitePool, Transaction};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use estoque_core::validation::validate_reduction_amount;
use estoque_core::{EstoqueItem, Produto};

const ENTITY: &str = "Produto";

// =============================================================================
// Row Mapping
// =============================================================================

/// A row of the `cadastro` table, with the column names as stored.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ProdutoRow {
    pub id: i64,
    pub nome: String,
    pub quantidade: i64,
    pub preco_unidade: f64,
    pub descricao: String,
    pub codigo: String,
}

/// The one place where `preco_unidade` becomes `preco_unit`.
impl From<ProdutoRow> for EstoqueItem {
    fn from(row: ProdutoRow) -> Self {
        EstoqueItem {
            id: row.id,
            nome: row.nome,
            quantidade: row.quantidade,
            preco_unit: row.preco_unidade,
            descricao: row.descricao,
            codigo: row.codigo,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.produtos();
///
/// let id = repo.insert(&produto).await?;
/// let restante = repo.reduce_quantity(id, 3).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProdutoRepository {
    pool: SqlitePool,
    reduce_lock: Arc<Mutex<()>>,
}

impl ProdutoRepository {
    /// Creates a new ProdutoRepository.
    ///
    /// Repositories that must not reduce the same stock concurrently have to
    /// share `reduce_lock`; [`crate::Database::produtos`] takes care of that.
    pub fn new(pool: SqlitePool, reduce_lock: Arc<Mutex<()>>) -> Self {
        ProdutoRepository { pool, reduce_lock }
    }

    /// Inserts a new product and returns its store-assigned id.
    ///
    /// The product is expected to be validated already; it is not checked
    /// again here.
    pub async fn insert(&self, produto: &Produto) -> DbResult<i64> {
        debug!(codigo = %produto.codigo, nome = %produto.nome, "Inserting produto");

        let result = sqlx::query(
            r#"
            INSERT INTO cadastro (nome, quantidade, preco_unidade, descricao, codigo)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&produto.nome)
        .bind(produto.quantidade)
        .bind(produto.preco_compra)
        .bind(&produto.descricao)
        .bind(&produto.codigo)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        info!(id, codigo = %produto.codigo, "Produto inserted");
        Ok(id)
    }

    /// Lists every stored product, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<EstoqueItem>> {
        let rows = sqlx::query_as::<_, ProdutoRow>(
            r#"
            SELECT id, nome, quantidade, preco_unidade, descricao, codigo
            FROM cadastro
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Listed produtos");
        Ok(rows.into_iter().map(EstoqueItem::from).collect())
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(EstoqueItem))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<EstoqueItem>> {
        let row = sqlx::query_as::<_, ProdutoRow>(
            r#"
            SELECT id, nome, quantidade, preco_unidade, descricao, codigo
            FROM cadastro
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EstoqueItem::from))
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(())` - Row removed
    /// * `Err(DbError::NotFound)` - No row had that id
    pub async fn delete_by_id(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting produto");

        let result = sqlx::query("DELETE FROM cadastro WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(ENTITY, id));
        }

        info!(id, "Produto deleted");
        Ok(())
    }

    /// Removes `amount` units from a product's stock.
    ///
    /// ## Returns
    /// * `Ok(new_quantity)` - Transaction committed
    /// * `Err(DbError::Validation)` - `amount` is negative
    /// * `Err(DbError::NotFound)` - No row had that id
    /// * `Err(DbError::InsufficientStock)` - Stock would go negative
    /// * `Err(DbError::NoRowsAffected)` - Row disappeared before the write
    ///
    /// Every error path rolls the transaction back; nothing is written
    /// unless the whole sequence succeeds.
    pub async fn reduce_quantity(&self, id: i64, amount: i64) -> DbResult<i64> {
        validate_reduction_amount(amount)?;

        debug!(id, amount, "Reducing stock");

        let _guard = self.reduce_lock.lock().await;

        // IMMEDIATE takes the write lock before the read, so a writer on
        // another connection (a delete) either lands before our read or
        // waits until we commit.
        let mut tx = self
            .pool
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        // Read
        let current: Option<i64> =
            sqlx::query_scalar("SELECT quantidade FROM cadastro WHERE id = ?1")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        let Some(current) = current else {
            return abort(tx, DbError::not_found(ENTITY, id)).await;
        };

        // Check
        let new_quantity = match current.checked_sub(amount) {
            Some(q) if q >= 0 => q,
            _ => {
                warn!(id, available = current, requested = amount, "Insufficient stock");
                let err = DbError::InsufficientStock {
                    id,
                    available: current,
                    requested: amount,
                };
                return abort(tx, err).await;
            }
        };

        // Write
        let result = sqlx::query("UPDATE cadastro SET quantidade = ?1 WHERE id = ?2")
            .bind(new_quantity)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return abort(tx, DbError::NoRowsAffected { id }).await;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(id, quantidade = new_quantity, "Stock reduced");
        Ok(new_quantity)
    }

    /// Counts stored products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cadastro")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Rolls back and returns `err`. A failed rollback is logged; the original
/// error is still the one reported.
async fn abort<T>(tx: Transaction<'_, Sqlite>, err: DbError) -> DbResult<T> {
    if let Err(rollback_err) = tx.rollback().await {
        warn!(error = %rollback_err, "Rollback failed");
    }
    Err(err)
}

//! # Report Commands
//!
//! Builds the payload for the stock report. Rendering and sharing the
//! document are handled by the UI.

use chrono::Utc;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::DbState;
use estoque_core::StockReport;

/// Snapshot of every stored product plus the aggregate stock value.
pub async fn stock_report(db: &DbState) -> Result<StockReport, ApiError> {
    debug!("stock_report command");

    let items = db.inner().produtos().list_all().await?;
    let report = StockReport::build(items, Utc::now());

    info!(
        items = report.item_count(),
        total_quantity = report.total_quantity,
        total_value = report.total_value,
        "Stock report built"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::produto::register_produto;
    use estoque_core::ProdutoForm;
    use estoque_db::{Database, DbConfig};

    #[tokio::test]
    async fn test_empty_report() {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());

        let report = stock_report(&db).await.unwrap();
        assert!(report.is_empty());
        assert_eq!(report.total_value, 0.0);
    }

    #[tokio::test]
    async fn test_report_totals() {
        let db = DbState::new(Database::new(DbConfig::in_memory()).await.unwrap());

        for (nome, quantidade, preco) in [("Copo", "10", "5,50"), ("Tampa", "4", "0,25")] {
            let form = ProdutoForm {
                nome: nome.to_string(),
                quantidade: quantidade.to_string(),
                preco_compra: preco.to_string(),
                descricao: String::new(),
                codigo: "1".to_string(),
            };
            register_produto(&db, form).await.unwrap();
        }

        let report = stock_report(&db).await.unwrap();
        assert_eq!(report.item_count(), 2);
        assert_eq!(report.total_quantity, 14);
        assert!((report.total_value - 56.0).abs() < 1e-9);
    }
}

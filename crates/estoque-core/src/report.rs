//! # Stock Report
//!
//! Assembles the payload handed to the report generator: every stored item
//! plus the aggregate stock value. Rendering the document (PDF/HTML) and
//! sharing it happen outside this crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::EstoqueItem;

/// Snapshot of the whole inventory at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StockReport {
    pub items: Vec<EstoqueItem>,

    /// Sum of `quantidade * preco_unit` over all items.
    pub total_value: f64,

    /// Sum of all quantities.
    pub total_quantity: i64,

    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,
}

impl StockReport {
    /// Builds a report from the full item list.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Utc;
    /// use estoque_core::{EstoqueItem, StockReport};
    ///
    /// let items = vec![EstoqueItem {
    ///     id: 1,
    ///     nome: "Açaí".into(),
    ///     quantidade: 10,
    ///     preco_unit: 5.5,
    ///     descricao: String::new(),
    ///     codigo: "ACAI01".into(),
    /// }];
    /// let report = StockReport::build(items, Utc::now());
    /// assert_eq!(report.total_value, 55.0);
    /// ```
    pub fn build(items: Vec<EstoqueItem>, generated_at: DateTime<Utc>) -> Self {
        let total_value = total_stock_value(&items);
        let total_quantity = items.iter().map(|item| item.quantidade).sum();

        StockReport {
            items,
            total_value,
            total_quantity,
            generated_at,
        }
    }

    /// Number of distinct line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Aggregate value of a list of items.
pub fn total_stock_value(items: &[EstoqueItem]) -> f64 {
    items.iter().map(EstoqueItem::total_stock_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, quantidade: i64, preco_unit: f64) -> EstoqueItem {
        EstoqueItem {
            id,
            nome: format!("Item {}", id),
            quantidade,
            preco_unit,
            descricao: String::new(),
            codigo: format!("COD{}", id),
        }
    }

    #[test]
    fn test_empty_report() {
        let report = StockReport::build(Vec::new(), Utc::now());
        assert!(report.is_empty());
        assert_eq!(report.total_value, 0.0);
        assert_eq!(report.total_quantity, 0);
    }

    #[test]
    fn test_report_totals() {
        let items = vec![item(1, 10, 5.5), item(2, 4, 2.0), item(3, 0, 100.0)];
        let report = StockReport::build(items, Utc::now());

        assert_eq!(report.item_count(), 3);
        assert_eq!(report.total_quantity, 14);
        assert!((report.total_value - 63.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = StockReport::build(vec![item(1, 2, 3.0)], Utc::now());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["totalValue"], 6.0);
        assert_eq!(json["items"][0]["precoUnit"], 3.0);
        assert!(json.get("generatedAt").is_some());
    }
}

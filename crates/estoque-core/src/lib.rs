//! # estoque-core: Pure Business Logic for Estoque
//!
//! This crate holds the inventory rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Estoque Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Screens (React Native)                       │   │
//! │  │    Cadastro ──► Estoque ──► Relatório                           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    estoque-app commands                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ estoque-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌──────────┐   │   │
//! │  │   │   types   │  │ controller │  │ validation│  │  report  │   │   │
//! │  │   │  Produto  │  │ form parse │  │   rules   │  │  totals  │   │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └──────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    estoque-db (Database Layer)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Produto` (write shape) and `EstoqueItem` (read shape)
//! - [`validation`] - Field rules
//! - [`controller`] - Registration form parsing
//! - [`report`] - Stock report payload
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use estoque_core::Produto;
//!
//! let produto = Produto::new("Açaí", 10, 5.50, "Açaí congelado", "ACAI01");
//! assert!(produto.is_valid());
//! assert_eq!(produto.total_stock_value(), 55.0);
//! ```

pub mod controller;
pub mod error;
pub mod report;
pub mod types;
pub mod validation;

pub use controller::{build_produto, ProdutoForm};
pub use error::{CoreError, CoreResult, ParseError, ValidationError};
pub use report::StockReport;
pub use types::*;

//! # estoque-db: Database Layer for Estoque
//!
//! This crate provides database access for Estoque.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Estoque Data Flow                                │
//! │                                                                         │
//! │  App command (register_produto)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    estoque-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │    Schema    │  │   │
//! │  │   │   (pool.rs)   │    │ (produto.rs)  │    │ (schema.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ProdutoRepo   │    │ cadastro     │  │   │
//! │  │   │ Reduce lock   │    │ ProdutoRow    │    │ table DDL    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (estoque.db)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use estoque_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/estoque.db")).await?;
//!
//! let id = db.produtos().insert(&produto).await?;
//! db.produtos().reduce_quantity(id, 2).await?;
//! ```

pub mod error;
pub mod pool;
pub mod repository;
pub mod schema;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::produto::{ProdutoRepository, ProdutoRow};

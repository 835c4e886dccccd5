//! # Repository Module
//!
//! Database repository implementations for Estoque.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  App command                                                           │
//! │       │                                                                 │
//! │       │  db.produtos().reduce_quantity(id, 3)                          │
//! │       ▼                                                                 │
//! │  ProdutoRepository                                                     │
//! │  ├── insert(&self, produto)                                            │
//! │  ├── list_all(&self)                                                   │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── delete_by_id(&self, id)                                           │
//! │  └── reduce_quantity(&self, id, amount)                                │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (cadastro table)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProdutoRepository`](produto::ProdutoRepository) - Product CRUD and stock reduction

pub mod produto;

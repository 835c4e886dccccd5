//! # Commands Module
//!
//! All commands exposed to the screens.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── produto.rs  ◄─── Register, list, delete, reduce stock
//! └── report.rs   ◄─── Stock report payload
//! ```
//!
//! Every command takes the state it needs by reference and returns
//! `Result<T, ApiError>`. Business rules live in `estoque-core`; storage
//! lives in `estoque-db`.

pub mod produto;
pub mod report;

//! # Application State
//!
//! ```text
//! state/
//! ├── mod.rs      ◄─── You are here (exports)
//! └── db.rs       ◄─── Database state wrapper
//! ```
//!
//! State is created once in `run()` and passed by reference to commands.

pub mod db;

pub use db::DbState;

//! # Estoque Entry Point
//!
//! Opens the inventory database (creating the schema if needed) and prints
//! the current stock report as JSON. The setup lives in `lib.rs`.

#[tokio::main]
async fn main() {
    if let Err(e) = estoque_app::run().await {
        eprintln!("estoque: {}", e);
        std::process::exit(1);
    }
}

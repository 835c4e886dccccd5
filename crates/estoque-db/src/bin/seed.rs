//! # Seed Data Generator
//!
//! Populates the database with a sample açaí-shop inventory for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./estoque_dev.db
//! cargo run -p estoque-db --bin seed
//!
//! # Specify database path
//! cargo run -p estoque-db --bin seed -- --db ./data/estoque.db
//!
//! # Seed even if the table already has rows
//! cargo run -p estoque-db --bin seed -- --force
//! ```
//!
//! Every sample goes through the registration form controller, so the seed
//! data obeys the same parsing and validation rules as typed input.

use std::env;

use chrono::Utc;
use estoque_core::{build_produto, ProdutoForm, StockReport};
use estoque_db::{Database, DbConfig};

/// Sample stock: (nome, quantidade, preco, codigo).
const SAMPLES: &[(&str, &str, &str, &str)] = &[
    ("Açaí", "400", "16,99", "1235813213455"),
    ("Calda Morango", "20", "19,20", "1235813213456"),
    ("Granola", "15", "12,50", "1235813213457"),
    ("Leite em pó", "10", "22,00", "222222222"),
    ("Banana", "50", "1,20", "333333333"),
    ("Morango", "30", "6,00", "444444444"),
    ("Leite condensado", "25", "4,80", "555555555"),
    ("Chocolate granulado", "20", "3,70", "666666666"),
    ("Copo 300ml", "100", "0,15", "777777777"),
    ("Tampa 300ml", "100", "0,10", "888888888"),
    ("Colher descartável", "200", "0,08", "999999999"),
    ("Guardanapo", "300", "0,05", "101010101"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./estoque_dev.db");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Estoque Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./estoque_dev.db)");
                println!("  -f, --force        Seed even if products already exist");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Estoque Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Schema ready");

    let existing = db.produtos().count().await?;
    if existing > 0 && !force {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates (use --force to override).");
        return Ok(());
    }

    let mut inserted = 0;
    for (nome, quantidade, preco, codigo) in SAMPLES {
        let form = ProdutoForm {
            nome: nome.to_string(),
            quantidade: quantidade.to_string(),
            preco_compra: preco.to_string(),
            descricao: format!("Amostra: {}", nome),
            codigo: codigo.to_string(),
        };

        let produto = match build_produto(&form) {
            Ok(produto) => produto,
            Err(e) => {
                eprintln!("Skipping {}: {}", nome, e);
                continue;
            }
        };

        if let Err(e) = db.produtos().insert(&produto).await {
            eprintln!("Failed to insert {}: {}", nome, e);
            continue;
        }
        inserted += 1;
    }

    let report = StockReport::build(db.produtos().list_all().await?, Utc::now());

    println!();
    println!("✓ Inserted {} products", inserted);
    println!(
        "  Stock: {} items, {} units, R$ {:.2}",
        report.item_count(),
        report.total_quantity,
        report.total_value
    );

    db.close().await;
    Ok(())
}

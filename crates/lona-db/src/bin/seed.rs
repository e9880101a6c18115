//! # Seed Data Generator
//!
//! Populates the database with a handful of demo quotes for development.
//!
//! ## Usage
//! ```bash
//! cargo run -p lona-db --bin seed
//!
//! # Specify database path
//! cargo run -p lona-db --bin seed -- --db ./data/orcamentos.db
//! ```
//!
//! Each demo quote goes through the real flow: build a draft, add items,
//! submit, store. Nothing is written straight to the tables.

use std::env;

use lona_core::{
    ClientKind, DraftQuote, FreightTerm, MadeItem, OrderMode, RollItem, TaxTables,
};
use lona_db::{Database, DbConfig, DEFAULT_DB_FILE};

/// Demo quote fixtures: (client, state, kind, mode, base price).
const DEMO_CLIENTS: &[(&str, &str, ClientKind, OrderMode, f64)] = &[
    (
        "Transportes Andrade Ltda",
        "SP",
        ClientKind::Revenda,
        OrderMode::Direta,
        28.5,
    ),
    (
        "Sítio Boa Vista",
        "MG",
        ClientKind::ConsumidorFinal,
        OrderMode::Direta,
        19.9,
    ),
    (
        "Coberturas Paraná",
        "PR",
        ClientKind::Revenda,
        OrderMode::Industrializacao,
        24.0,
    ),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from(DEFAULT_DB_FILE);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Lona Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./{DEFAULT_DB_FILE})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Lona Seed Data Generator");
    println!("===========================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing quotes
    let existing = db.quotes().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} quotes", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating quotes...");

    let tables = TaxTables::new();

    for (idx, (client, state, kind, mode, base_price)) in DEMO_CLIENTS.iter().enumerate() {
        let mut draft = DraftQuote::new();
        draft.header.client_name = client.to_string();
        draft.header.state = state.to_string();
        draft.header.client_kind = *kind;
        draft.header.order_mode = *mode;
        draft.header.freight = FreightTerm::Cif;
        draft.header.seller_name = "Equipe Comercial".to_string();
        draft.header.base_price = *base_price;

        draft.add_made_item(MadeItem {
            product: "Encerado".to_string(),
            length_m: 4.0 + idx as f64,
            width_m: 2.5,
            quantity: 2,
            color: "Azul".to_string(),
            unit_price: None,
        })?;
        draft.add_roll_item(RollItem {
            product: "Vitro 0,60".to_string(),
            length_m: 50.0,
            width_m: 1.4,
            quantity: 1,
            color: "Cristal".to_string(),
            thickness_mm: Some(0.6),
            unit_price: Some(base_price * 0.8),
        })?;

        let submission = draft.submit(&tables)?;
        let id = db
            .quotes()
            .insert(&submission.header, &submission.made_items, &submission.roll_items)
            .await?;

        println!(
            "  #{id} {client} → total confeccionados R$ {:.2}, bobinas R$ {:.2}",
            submission.made_totals.final_total, submission.roll_totals.final_total
        );
    }

    println!();
    println!("✓ Seeded {} quotes", DEMO_CLIENTS.len());

    db.close().await;
    Ok(())
}

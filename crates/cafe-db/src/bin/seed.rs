//! # Seed Data Generator
//!
//! Populates the database with the starter café catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database
//! cargo run -p cafe-db --bin seed
//!
//! # Specify database path
//! cargo run -p cafe-db --bin seed -- --db ./data/cafe.db
//! ```
//!
//! ## Generated Catalog
//! Three espresso drinks, each with an "Extra shot" (+500) and a free
//! "Syrup" option. Prices are in the smallest currency unit; every item
//! starts with a stock of 10.

use std::env;

use cafe_db::{Database, DbConfig, NewMenuItem};

/// The starter catalog: (name, description, price, stock).
const MENU: &[(&str, &str, i64, i64)] = &[
    (
        "Americano (Iced)",
        "Espresso over cold water and ice",
        4000,
        10,
    ),
    ("Americano (Hot)", "Espresso topped with hot water", 4000, 10),
    ("Caffe Latte", "Espresso with steamed milk", 5000, 10),
];

/// Options attached to every drink: (name, price delta).
const OPTIONS: &[(&str, i64)] = &[("Extra shot", 500), ("Syrup", 0)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path =
        env::var("DATABASE_PATH").unwrap_or_else(|_| String::from("./data/cafe.db"));

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
                println!("Café Counter Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./data/cafe.db,");
                println!("                     or the DATABASE_PATH environment variable)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Café Counter Seed Data Generator");
    println!("===================================");
    println!("Database: {}", db_path);
    println!();

    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    // Check existing catalog
    let existing = db.menus().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} menu items", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Seeding catalog...");

    for (name, description, price, stock_qty) in MENU {
        let item = db
            .menus()
            .insert(&NewMenuItem {
                name: name.to_string(),
                description: Some(description.to_string()),
                price: *price,
                image_url: None,
                stock_qty: *stock_qty,
            })
            .await?;

        for (option_name, price_delta) in OPTIONS {
            db.menus()
                .add_option(item.id, option_name, *price_delta)
                .await?;
        }

        println!(
            "  + {} ({} / stock {}) with {} options",
            item.name,
            item.price,
            item.stock_qty,
            OPTIONS.len()
        );
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

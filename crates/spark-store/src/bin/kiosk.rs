//! # Kiosk: Headless Widget Host
//!
//! Drives a full cart session end-to-end without a browser: scan, add,
//! adjust, check out. Doubles as a smoke test for the SQLite medium.
//!
//! ## Usage
//! ```bash
//! # Default database path (./data/spark.db)
//! cargo run -p spark-store --bin kiosk
//!
//! # Custom database path
//! SPARK_DB_PATH=/tmp/spark.db cargo run -p spark-store --bin kiosk
//!
//! # Custom demo price (minor units)
//! SPARK_DEMO_PRICE_CENTS=12500 cargo run -p spark-store --bin kiosk
//! ```
//!
//! Because the snapshot persists, running the kiosk twice restores the
//! previous session's cart before clearing it for the new run.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use spark_core::Product;
use spark_store::{
    CartAction, CartConfig, CartStore, CartView, Notifier, SqliteMedium, StorageMedium,
    StoreConfig, TracingNotifier,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = CartConfig::from_env();
    info!(store = %config.store_name, "Starting kiosk session");

    let db_path = database_path()?;
    let medium: Arc<dyn StorageMedium> =
        Arc::new(SqliteMedium::open(StoreConfig::new(&db_path)).await?);
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

    let store = CartStore::open(medium, notifier, config.clone()).await;

    // Anything left over from a previous kiosk run.
    let restored = store.view().await;
    if !restored.items.is_empty() {
        println!(
            "Restored previous session: {} item(s), {}",
            restored.totals.item_count, restored.totals.display_total
        );
        store.dispatch(CartAction::Clear).await?;
    }

    // A shopper browses the storefront: two cards get scanned, the first one
    // twice, then its quantity is bumped from the cart panel.
    let rocket = Product::scanned(
        Some("Sky Rocket 12-Shot"),
        Some("images/sky-rocket.jpg"),
        &config.pricing,
    );
    let fountain = Product::scanned(Some("Golden Fountain"), None, &config.pricing);

    store
        .dispatch(CartAction::Add {
            product: rocket.clone(),
        })
        .await?;
    store
        .dispatch(CartAction::Add {
            product: rocket.clone(),
        })
        .await?;
    store
        .dispatch(CartAction::Add {
            product: fountain.clone(),
        })
        .await?;
    store
        .dispatch(CartAction::SetQuantity {
            id: rocket.id.clone(),
            quantity: 3,
        })
        .await?;

    print_cart(&store.view().await);

    let summary = store.checkout().await?;
    println!(
        "Checkout requested: {} line(s), total {}",
        summary.items.len(),
        config.format_price(summary.total)
    );

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=spark=trace` - Show trace for spark crates only
/// - Default: INFO level, spark crates at DEBUG
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spark=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the database file path.
///
/// Set `SPARK_DB_PATH` to use a custom path; defaults to `./data/spark.db`.
fn database_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = match env::var("SPARK_DB_PATH") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from("./data/spark.db"),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    Ok(path)
}

/// Renders the cart panel the way the page would.
fn print_cart(view: &CartView) {
    println!("── Cart ──────────────────────────────");
    for item in &view.items {
        println!("  {} × {}  ({})", item.quantity, item.name, item.image);
    }
    println!(
        "  {} item(s), total {}",
        view.totals.item_count, view.totals.display_total
    );
    println!("──────────────────────────────────────");
}

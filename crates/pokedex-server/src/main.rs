//! Pokédex Record Server binary
//!
//! Wires the SQLite store into the catalog service and serves the JSON API.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use pokedex_core::RecordStore;
use pokedex_server::config::load_config;
use pokedex_server::services::Catalog;
use pokedex_server::storage::SqliteStore;
use pokedex_server::{app, AppState};

#[tokio::main]
async fn main() {
    // Honor a .env file before reading the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Pokedex Record Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = load_config()
        .await
        .context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={}",
        config.bind_address, config.database_path
    );

    // Schema bootstrap failure here is fatal; there is no degraded mode.
    let store = SqliteStore::open(&config.database_path)
        .await
        .context("Failed to open SQLite database")?;
    store
        .init_schema()
        .await
        .context("Failed to initialize database schema")?;
    info!("SQLite store ready at: {}", config.database_path);

    let catalog = Arc::new(Catalog::new(Arc::new(store)));
    let state = AppState { catalog };

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}

//! Environment configuration

use anyhow::Result;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub database_path: String,
    /// Consumed by the session/flash layer of whatever front end sits on
    /// top; the record contract itself never reads it.
    pub secret_key: String,
    pub data_dir: PathBuf,
}

pub async fn load_config() -> Result<Config> {
    info!("Loading configuration from environment...");

    let data_dir = std::env::var("DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./data"));
    info!("Data directory: {}", data_dir.display());

    if let Err(e) = tokio::fs::create_dir_all(&data_dir).await {
        return Err(anyhow::anyhow!(
            "Failed to create data directory {}: {}",
            data_dir.display(),
            e
        ));
    }

    let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
        let path = data_dir.join("pokedex.db");
        path.to_string_lossy().to_string()
    });

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8300".to_string());

    let secret_key = std::env::var("SECRET_KEY").unwrap_or_else(|_| {
        warn!("SECRET_KEY not set, using default (insecure for production)");
        "default-secret-key".to_string()
    });

    Ok(Config {
        bind_address,
        database_path,
        secret_key,
        data_dir,
    })
}

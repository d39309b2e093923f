//! Dashboard server binary for IxStats.
//!
//! This is the main entry point that wires together configuration, the
//! IxTime clock, the optional `PostgreSQL`/Redis stores, the demo seed,
//! and the Axum server.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `ixstats-config.yaml`
//! 3. Build application state (clock, stores, hydration, seed)
//! 4. Serve the dashboard API until termination

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ixstats_core::AppConfig;
use ixstats_server::server::{start_server, ServerConfig};
use ixstats_server::startup::build_state;

/// Path of the configuration file, relative to the working directory.
const CONFIG_PATH: &str = "ixstats-config.yaml";

/// Application entry point for the dashboard server.
///
/// # Errors
///
/// Returns an error if any initialization step or the server itself
/// fails.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration first so the logging section can shape the
    // subscriber (RUST_LOG still wins when set).
    let config_path = Path::new(CONFIG_PATH);
    let config = if config_path.exists() {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::default()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.filter.clone()));
    if config.logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }

    info!(
        world = config.world.name,
        multiplier = config.time.base_multiplier,
        database = config.infrastructure.database_url.is_some(),
        cache = config.infrastructure.redis_url.is_some(),
        "ixstats-server starting"
    );

    // 2-3. Build application state (clock, stores, hydration, seed).
    let state = build_state(&config).await?;

    // 4. Serve until termination.
    let server_config = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}

//! Aadhaar Insights Dashboard Server
//!
//! Run with: cargo run --bin aadhaar-insights-server
//!
//! # Configuration
//!
//! Loaded from the first config file found in:
//! - `<config_dir>/aadhaar-insights/config.toml`
//! - `/etc/aadhaar-insights/config.toml`
//! - `./config.toml`
//!
//! Environment variables override the file:
//! - `AADHAAR_HOST`: Host to bind to (default: 0.0.0.0)
//! - `AADHAAR_PORT`: Port to listen on (default: 8090)
//! - `AADHAAR_DEFAULT_SECTION`: Section shown on startup (default: overview)
//! - `AADHAAR_LOG_LEVEL`: Log level (default: info)
//! - `AADHAAR_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full filter directive, wins over the level above

use aadhaar_insights::api::{serve, AppState};
use aadhaar_insights::config::Config;
use aadhaar_insights::dataset::DatasetRegistry;
use aadhaar_insights::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    init_logging(&loaded.config.logging);
    loaded.log();
    let config = loaded.config;

    tracing::info!(
        "Starting Aadhaar Insights server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let registry = DatasetRegistry::global();
    tracing::info!("Dataset registry ready with {} datasets", registry.len());
    tracing::info!("Default section: {}", config.dashboard.default_section);

    let server = config.server.clone();
    let state = AppState::new(config);

    serve(state, &server).await?;

    tracing::info!("Aadhaar Insights server stopped");
    Ok(())
}

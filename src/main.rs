//! Heart Disease Prediction API - HTTP inference server
//!
//! Loads the trained classifier and its feature-order artifact at startup,
//! validates them against the request schema, and serves predictions over
//! HTTP. A missing or corrupt artifact aborts startup.
//!
//! # Usage
//! ```sh
//! MODEL_PATH=heart_model.json FEATURES_PATH=features.json cargo run
//! ```
//!
//! # Environment Variables
//! - `MODEL_PATH` - classifier artifact (default: heart_model.json)
//! - `FEATURES_PATH` - feature-order artifact (default: features.json)
//! - `HOST` / `PORT` - listen address (default: 0.0.0.0:8000)

use anyhow::{Context, Result};
use cardioserve::config::Config;
use cardioserve::infrastructure::artifacts::ModelContext;
use cardioserve::interfaces::http;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!(
        "Heart Disease Prediction API {} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: model={:?}, features={:?}",
        config.model_path, config.features_path
    );

    let ctx = ModelContext::load(&config)
        .context("Model artifacts failed to load; refusing to start")?;

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, http::router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete.");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received. Exiting...");
}

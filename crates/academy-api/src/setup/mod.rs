//! Application setup and initialization
//!
//! Initialization logic extracted from main.rs so tests can build the same
//! router around in-memory stores.

pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use academy_core::Config;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(config.is_production())
        .map_err(|e| anyhow::anyhow!("Failed to initialize telemetry: {}", e))?;

    // Fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    tracing::info!(
        environment = %config.environment,
        bucket = %config.s3_bucket_name,
        cdn_domain = config.cloudfront_domain.as_deref().unwrap_or(""),
        config_table = config.dynamodb_table.as_deref().unwrap_or(""),
        default_interval_seconds = config.default_interval_seconds,
        "Configuration loaded and validated successfully"
    );

    let (media_store, config_store) = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config, media_store, config_store));
    let router = routes::setup_routes(state.clone());

    Ok((state, router))
}

//! Store setup and initialization

use academy_core::Config;
use academy_storage::{create_config_store, create_media_store, ConfigStore, MediaStore};
use anyhow::Result;
use std::sync::Arc;

/// Build the media store and, when a table is configured, the config store.
pub async fn setup_storage(
    config: &Config,
) -> Result<(Arc<dyn MediaStore>, Option<Arc<dyn ConfigStore>>)> {
    tracing::info!("Initializing stores...");

    let media_store = create_media_store(config).await?;
    let config_store = create_config_store(config).await?;

    match config_store {
        Some(ref store) => tracing::info!(
            media_backend = media_store.backend_name(),
            config_backend = store.backend_name(),
            "Stores initialized successfully"
        ),
        None => tracing::warn!(
            media_backend = media_store.backend_name(),
            "DYNAMODB_TABLE not set, academy config lookup disabled"
        ),
    }

    Ok((media_store, config_store))
}

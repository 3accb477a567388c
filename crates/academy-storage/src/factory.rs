#[cfg(feature = "config-dynamodb")]
use crate::DynamoConfigStore;
#[cfg(feature = "storage-s3")]
use crate::S3MediaStore;
use crate::{ConfigStore, MediaStore, StorageError, StorageResult};
use academy_core::Config;
use std::sync::Arc;

/// Create the media store based on configuration
#[cfg(feature = "storage-s3")]
pub async fn create_media_store(config: &Config) -> StorageResult<Arc<dyn MediaStore>> {
    if config.s3_bucket_name.is_empty() {
        return Err(StorageError::ConfigError(
            "S3_BUCKET_NAME not configured".to_string(),
        ));
    }

    let store = S3MediaStore::new(
        config.s3_bucket_name.clone(),
        config.aws_region.clone(),
        config.s3_endpoint.clone(),
    )?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "storage-s3"))]
pub async fn create_media_store(_config: &Config) -> StorageResult<Arc<dyn MediaStore>> {
    Err(StorageError::ConfigError(
        "S3 media store not available (storage-s3 feature not enabled)".to_string(),
    ))
}

/// Create the academy config store, if a table is configured.
///
/// `Ok(None)` means the lookup is disabled and every academy gets an empty record.
#[cfg(feature = "config-dynamodb")]
pub async fn create_config_store(config: &Config) -> StorageResult<Option<Arc<dyn ConfigStore>>> {
    let Some(table) = config.dynamodb_table.clone() else {
        return Ok(None);
    };

    let store = DynamoConfigStore::new(table, config.aws_region.clone()).await;
    Ok(Some(Arc::new(store)))
}

#[cfg(not(feature = "config-dynamodb"))]
pub async fn create_config_store(config: &Config) -> StorageResult<Option<Arc<dyn ConfigStore>>> {
    match config.dynamodb_table {
        None => Ok(None),
        Some(_) => Err(StorageError::ConfigError(
            "DynamoDB config store not available (config-dynamodb feature not enabled)"
                .to_string(),
        )),
    }
}

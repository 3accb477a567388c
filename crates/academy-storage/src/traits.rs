//! Storage abstraction traits
//!
//! This module defines the traits every media and config backend implements.

use academy_core::{AcademyRecord, AppError, StoredObject};
use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Listing failed: {0}")]
    ListFailed(String),

    #[error("Lookup failed: {0}")]
    LookupFailed(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConfigError(msg) => AppError::Config(msg),
            other => AppError::Storage(other.to_string()),
        }
    }
}

/// Blob store listing abstraction
///
/// Backends return every object under the prefix, draining all pages of the
/// underlying listing API before returning.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// List all objects whose key starts with `prefix`.
    async fn list_objects(&self, prefix: &str) -> StorageResult<Vec<StoredObject>>;

    /// Cheap connectivity probe used by readiness checks.
    async fn ping(&self) -> StorageResult<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Key-value configuration store abstraction
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Fetch the configuration record keyed by `academy_id`.
    ///
    /// A missing record is `Ok(None)`, not an error.
    async fn get_academy(&self, academy_id: &str) -> StorageResult<Option<AcademyRecord>>;

    /// Cheap connectivity probe used by readiness checks.
    async fn ping(&self) -> StorageResult<()>;

    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;
}

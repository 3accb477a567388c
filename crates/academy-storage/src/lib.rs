//! Academy Storage Library
//!
//! This crate provides the two read-only collaborators of the playlist API:
//! a [`MediaStore`] that lists the objects under an academy's prefix and a
//! [`ConfigStore`] that looks up an academy's configuration record.
//!
//! # Object key layout
//!
//! Media for an academy lives under `academies/{academy_id}/`. Listings drain
//! every page before returning; callers never see pagination.

#[cfg(feature = "config-dynamodb")]
pub mod dynamodb;
pub mod factory;
#[cfg(any(test, feature = "storage-memory"))]
pub mod memory;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
#[cfg(feature = "config-dynamodb")]
pub use dynamodb::DynamoConfigStore;
pub use factory::{create_config_store, create_media_store};
#[cfg(any(test, feature = "storage-memory"))]
pub use memory::{InMemoryConfigStore, InMemoryMediaStore};
#[cfg(feature = "storage-s3")]
pub use s3::S3MediaStore;
pub use traits::{ConfigStore, MediaStore, StorageError, StorageResult};

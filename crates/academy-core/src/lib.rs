//! Academy Core Library
//!
//! This crate provides the domain models, error types, configuration, and media
//! listing rules shared by the storage backends and the playlist API.

pub mod config;
pub mod constants;
pub mod error;
pub mod media;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use media::{academy_prefix, build_media_list, MediaUrlBuilder};
pub use models::{
    AcademyRecord, MediaItem, MediaListResponse, MediaType, PlaylistConfig, PlaylistResponse,
    StoredObject,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Media type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
}

/// One entry of a blob store listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub key: String,
    pub size: Option<u64>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl StoredObject {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            size: None,
            last_modified: None,
        }
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_last_modified(mut self, last_modified: DateTime<Utc>) -> Self {
        self.last_modified = Some(last_modified);
        self
    }
}

/// A displayable asset as returned to signage screens.
///
/// `last_modified` is kept as the ISO-8601 string that is both serialized and
/// used for ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub filename: String,
    pub size: Option<u64>,
    pub last_modified: Option<String>,
}

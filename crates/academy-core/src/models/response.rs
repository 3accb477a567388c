use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::{MediaItem, PlaylistConfig};

/// Body of `GET /academies/{academy_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaListResponse {
    pub academy_id: String,
    pub media_list: Vec<MediaItem>,
    pub total_items: usize,
}

impl MediaListResponse {
    pub fn new(academy_id: impl Into<String>, media_list: Vec<MediaItem>) -> Self {
        Self {
            academy_id: academy_id.into(),
            total_items: media_list.len(),
            media_list,
        }
    }
}

/// Body of `GET /academies/{academy_id}/playlist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistResponse {
    pub academy_id: String,
    pub playlist_config: PlaylistConfig,
    pub media_list: Vec<MediaItem>,
    pub total_items: usize,
    pub generated_at: String,
}

impl PlaylistResponse {
    pub fn new(
        academy_id: impl Into<String>,
        playlist_config: PlaylistConfig,
        media_list: Vec<MediaItem>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            academy_id: academy_id.into(),
            playlist_config,
            total_items: media_list.len(),
            media_list,
            generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

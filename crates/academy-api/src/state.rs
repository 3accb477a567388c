//! Application state shared by every request.
//!
//! Store handles are created once at startup and reused across requests; none
//! of the state is mutated afterwards.

use academy_core::{Config, MediaUrlBuilder};
use academy_storage::{ConfigStore, MediaStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub media_store: Arc<dyn MediaStore>,
    /// `None` when no config table is configured.
    pub config_store: Option<Arc<dyn ConfigStore>>,
    pub urls: MediaUrlBuilder,
}

impl AppState {
    pub fn new(
        config: Config,
        media_store: Arc<dyn MediaStore>,
        config_store: Option<Arc<dyn ConfigStore>>,
    ) -> Self {
        let urls = MediaUrlBuilder::from(&config);
        Self {
            config,
            media_store,
            config_store,
            urls,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::feed::services::IncidentFeed;

/// Feed connection status shown as the online/offline toggle
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedStatusDto {
    pub connected: bool,
    /// Number of registered listeners (the board plus open streams)
    pub listeners: usize,
    pub warmup_secs: u64,
    pub min_interval_secs: u64,
    pub max_interval_secs: u64,
}

impl From<&IncidentFeed> for FeedStatusDto {
    fn from(feed: &IncidentFeed) -> Self {
        let config = feed.config();
        Self {
            connected: feed.is_connected(),
            listeners: feed.listener_count(),
            warmup_secs: config.warmup.as_secs(),
            min_interval_secs: config.min_interval.as_secs(),
            max_interval_secs: config.max_interval.as_secs(),
        }
    }
}

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::feed::handlers;
use crate::features::feed::services::IncidentFeed;

/// Create routes for the feed feature
pub fn routes(feed: Arc<IncidentFeed>) -> Router {
    Router::new()
        .route("/api/feed", get(handlers::get_status))
        .route("/api/feed/connect", post(handlers::connect))
        .route("/api/feed/disconnect", post(handlers::disconnect))
        .route("/api/feed/stream", get(handlers::stream))
        .with_state(feed)
}

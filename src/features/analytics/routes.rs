use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::analytics::handlers;
use crate::features::analytics::services::AnalyticsService;

/// Create analytics routes
pub fn routes(analytics_service: Arc<AnalyticsService>) -> Router {
    Router::new()
        .route("/api/analytics/stats", get(handlers::get_stats))
        .route("/api/analytics/summary", get(handlers::get_summary))
        .with_state(analytics_service)
}

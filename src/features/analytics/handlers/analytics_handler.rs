use axum::{extract::State, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::analytics::dtos::*;
use crate::features::analytics::services::AnalyticsService;
use crate::shared::types::ApiResponse;

/// Get statistics for the analytics charts
///
/// Values are regenerated on every call.
#[utoipa::path(
    get,
    path = "/api/analytics/stats",
    tag = "analytics",
    responses(
        (status = 200, description = "Incident statistics", body = ApiResponse<IncidentStatsDto>),
    )
)]
pub async fn get_stats(
    State(service): State<Arc<AnalyticsService>>,
) -> Result<Json<ApiResponse<IncidentStatsDto>>, AppError> {
    Ok(Json(ApiResponse::success(Some(service.stats()), None, None)))
}

/// Get live counts over the incident board
#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    tag = "analytics",
    responses(
        (status = 200, description = "Board summary", body = ApiResponse<BoardSummaryDto>),
    )
)]
pub async fn get_summary(
    State(service): State<Arc<AnalyticsService>>,
) -> Result<Json<ApiResponse<BoardSummaryDto>>, AppError> {
    Ok(Json(ApiResponse::success(Some(service.summary()), None, None)))
}

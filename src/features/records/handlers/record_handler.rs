use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::features::records::dtos::*;
use crate::features::records::services::RecordService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Search the citizen registry
#[utoipa::path(
    get,
    path = "/api/records",
    tag = "records",
    params(RecordSearchQuery, PaginationQuery),
    responses(
        (status = 200, description = "Matching records", body = ApiResponse<Vec<RecordResponseDto>>),
    )
)]
pub async fn list_records(
    State(service): State<Arc<RecordService>>,
    Query(search): Query<RecordSearchQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<RecordResponseDto>>>, AppError> {
    let (records, total) = service.search(&search, &pagination);
    let dtos = records.into_iter().map(RecordResponseDto::from).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

/// Registry counters
#[utoipa::path(
    get,
    path = "/api/records/summary",
    tag = "records",
    responses(
        (status = 200, description = "Registry counters", body = ApiResponse<RecordSummaryDto>),
    )
)]
pub async fn get_summary(
    State(service): State<Arc<RecordService>>,
) -> Result<Json<ApiResponse<RecordSummaryDto>>, AppError> {
    Ok(Json(ApiResponse::success(Some(service.summary()), None, None)))
}

/// Get record by ID
#[utoipa::path(
    get,
    path = "/api/records/{id}",
    tag = "records",
    params(
        ("id" = String, Path, description = "Record ID")
    ),
    responses(
        (status = 200, description = "Record", body = ApiResponse<RecordResponseDto>),
        (status = 404, description = "Record not found")
    )
)]
pub async fn get_record(
    State(service): State<Arc<RecordService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<RecordResponseDto>>, AppError> {
    let record = service.get(&id)?;
    Ok(Json(ApiResponse::success(Some(record.into()), None, None)))
}

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::incidents::dtos::{
    ArchiveSearchQuery, CreateIncidentDto, IncidentResponseDto, UpdateIncidentStatusDto,
};
use crate::features::incidents::services::IncidentService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// List active incidents (everything not archived), newest first
#[utoipa::path(
    get,
    path = "/api/incidents",
    responses(
        (status = 200, description = "Active incidents", body = ApiResponse<Vec<IncidentResponseDto>>),
    ),
    tag = "incidents"
)]
pub async fn list_incidents(
    State(service): State<Arc<IncidentService>>,
) -> Result<Json<ApiResponse<Vec<IncidentResponseDto>>>> {
    let incidents: Vec<IncidentResponseDto> = service
        .list_active()
        .into_iter()
        .map(IncidentResponseDto::from)
        .collect();
    let total = incidents.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(incidents),
        None,
        Some(Meta { total }),
    )))
}

/// Create an incident from the "new call" form
///
/// The incident is broadcast on the feed, so open feed streams see it too.
#[utoipa::path(
    post,
    path = "/api/incidents",
    request_body = CreateIncidentDto,
    responses(
        (status = 201, description = "Incident created", body = ApiResponse<IncidentResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "incidents"
)]
pub async fn create_incident(
    State(service): State<Arc<IncidentService>>,
    AppJson(dto): AppJson<CreateIncidentDto>,
) -> Result<(StatusCode, Json<ApiResponse<IncidentResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let incident = service.create(dto);
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(incident.into()),
            Some("Incident created".to_string()),
            None,
        )),
    ))
}

/// Get incident by ID
#[utoipa::path(
    get,
    path = "/api/incidents/{id}",
    params(
        ("id" = String, Path, description = "Incident ID")
    ),
    responses(
        (status = 200, description = "Incident found", body = ApiResponse<IncidentResponseDto>),
        (status = 404, description = "Incident not found")
    ),
    tag = "incidents"
)]
pub async fn get_incident(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<IncidentResponseDto>>> {
    let incident = service.get(&id)?;
    Ok(Json(ApiResponse::success(Some(incident.into()), None, None)))
}

/// Advance an incident's status ("take to work", "complete")
#[utoipa::path(
    patch,
    path = "/api/incidents/{id}/status",
    params(
        ("id" = String, Path, description = "Incident ID")
    ),
    request_body = UpdateIncidentStatusDto,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<IncidentResponseDto>),
        (status = 400, description = "Crew or report missing"),
        (status = 404, description = "Incident not found"),
        (status = 409, description = "Transition not allowed from the current status")
    ),
    tag = "incidents"
)]
pub async fn update_incident_status(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateIncidentStatusDto>,
) -> Result<Json<ApiResponse<IncidentResponseDto>>> {
    let incident = service.update_status(&id, &dto)?;
    Ok(Json(ApiResponse::success(Some(incident.into()), None, None)))
}

/// Move a resolved incident into the archive
#[utoipa::path(
    post,
    path = "/api/incidents/{id}/archive",
    params(
        ("id" = String, Path, description = "Incident ID")
    ),
    responses(
        (status = 200, description = "Incident archived", body = ApiResponse<IncidentResponseDto>),
        (status = 404, description = "Incident not found"),
        (status = 409, description = "Incident is not resolved")
    ),
    tag = "incidents"
)]
pub async fn archive_incident(
    State(service): State<Arc<IncidentService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<IncidentResponseDto>>> {
    let incident = service.archive(&id)?;
    Ok(Json(ApiResponse::success(Some(incident.into()), None, None)))
}

/// Search the archive
#[utoipa::path(
    get,
    path = "/api/incidents/archive",
    params(ArchiveSearchQuery, PaginationQuery),
    responses(
        (status = 200, description = "Archived incidents", body = ApiResponse<Vec<IncidentResponseDto>>),
    ),
    tag = "incidents"
)]
pub async fn list_archive(
    State(service): State<Arc<IncidentService>>,
    Query(search): Query<ArchiveSearchQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<IncidentResponseDto>>>> {
    let (incidents, total) = service.list_archived(search.q.as_deref(), &pagination);
    let dtos = incidents.into_iter().map(IncidentResponseDto::from).collect();

    Ok(Json(ApiResponse::success(
        Some(dtos),
        None,
        Some(Meta { total }),
    )))
}

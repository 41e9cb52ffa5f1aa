use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::shifts::dtos::*;
use crate::features::shifts::services::ShiftService;
use crate::shared::types::ApiResponse;

/// Get the current shift
///
/// `data` is null when no shift is in progress.
#[utoipa::path(
    get,
    path = "/api/shift",
    tag = "shift",
    responses(
        (status = 200, description = "Current shift", body = ApiResponse<ShiftResponseDto>),
    )
)]
pub async fn get_current(
    State(service): State<Arc<ShiftService>>,
) -> Result<Json<ApiResponse<ShiftResponseDto>>, AppError> {
    let shift = service.current().map(ShiftResponseDto::from);
    let message = shift
        .is_none()
        .then(|| "No active shift".to_string());
    Ok(Json(ApiResponse::success(shift, message, None)))
}

/// Start a shift
#[utoipa::path(
    post,
    path = "/api/shift",
    tag = "shift",
    request_body = StartShiftDto,
    responses(
        (status = 201, description = "Shift started", body = ApiResponse<ShiftResponseDto>),
        (status = 400, description = "Missing fields"),
        (status = 409, description = "A shift is already in progress")
    )
)]
pub async fn start_shift(
    State(service): State<Arc<ShiftService>>,
    AppJson(dto): AppJson<StartShiftDto>,
) -> Result<(StatusCode, Json<ApiResponse<ShiftResponseDto>>), AppError> {
    let shift = service.start(dto)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(shift.into()),
            Some("Shift started".to_string()),
            None,
        )),
    ))
}

/// End the current shift
#[utoipa::path(
    delete,
    path = "/api/shift",
    tag = "shift",
    responses(
        (status = 200, description = "Shift ended", body = ApiResponse<ShiftResponseDto>),
        (status = 404, description = "No active shift")
    )
)]
pub async fn end_shift(
    State(service): State<Arc<ShiftService>>,
) -> Result<Json<ApiResponse<ShiftResponseDto>>, AppError> {
    let shift = service.end()?;
    Ok(Json(ApiResponse::success(
        Some(shift.into()),
        Some("Shift ended".to_string()),
        None,
    )))
}

/// Toggle between online and away
#[utoipa::path(
    post,
    path = "/api/shift/online",
    tag = "shift",
    responses(
        (status = 200, description = "Online status toggled", body = ApiResponse<ShiftResponseDto>),
        (status = 404, description = "No active shift")
    )
)]
pub async fn toggle_online(
    State(service): State<Arc<ShiftService>>,
) -> Result<Json<ApiResponse<ShiftResponseDto>>, AppError> {
    let shift = service.toggle_online()?;
    Ok(Json(ApiResponse::success(Some(shift.into()), None, None)))
}

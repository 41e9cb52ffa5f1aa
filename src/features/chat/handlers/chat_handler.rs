use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::chat::dtos::*;
use crate::features::chat::services::ChatService;
use crate::shared::types::{ApiResponse, Meta};

/// List chat messages, oldest first
#[utoipa::path(
    get,
    path = "/api/chat/messages",
    tag = "chat",
    responses(
        (status = 200, description = "Conversation", body = ApiResponse<Vec<ChatMessageDto>>),
    )
)]
pub async fn list_messages(
    State(service): State<Arc<ChatService>>,
) -> Result<Json<ApiResponse<Vec<ChatMessageDto>>>, AppError> {
    let messages: Vec<ChatMessageDto> = service
        .list()
        .into_iter()
        .map(ChatMessageDto::from)
        .collect();
    let total = messages.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(messages),
        None,
        Some(Meta { total }),
    )))
}

/// Send a message to the dispatch centre
#[utoipa::path(
    post,
    path = "/api/chat/messages",
    tag = "chat",
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message sent", body = ApiResponse<ChatMessageDto>),
        (status = 400, description = "Validation error")
    )
)]
pub async fn send_message(
    State(service): State<Arc<ChatService>>,
    AppJson(dto): AppJson<SendMessageDto>,
) -> Result<(StatusCode, Json<ApiResponse<ChatMessageDto>>), AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let message = service.send(&dto.text)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(message.into()), None, None)),
    ))
}

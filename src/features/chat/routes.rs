use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::chat::handlers;
use crate::features::chat::services::ChatService;

/// Create chat routes
pub fn routes(chat_service: Arc<ChatService>) -> Router {
    Router::new()
        .route(
            "/api/chat/messages",
            get(handlers::list_messages).post(handlers::send_message),
        )
        .with_state(chat_service)
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::chat::models::ChatMessage;
use crate::shared::validation::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageDto {
    pub id: u64,
    pub sender: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub is_me: bool,
}

impl From<ChatMessage> for ChatMessageDto {
    fn from(m: ChatMessage) -> Self {
        Self {
            id: m.id,
            sender: m.sender,
            text: m.text,
            timestamp: m.timestamp,
            is_me: m.is_me,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendMessageDto {
    #[validate(
        custom(function = "not_blank", message = "Message text is required"),
        length(max = 4000, message = "Message must not exceed 4000 characters")
    )]
    pub text: String,
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::core::config::ChatConfig;
use crate::core::error::{AppError, Result};
use crate::features::chat::models::ChatMessage;

/// Acknowledgement the centre sends for every operator message
pub const CANNED_REPLY: &str =
    "Сообщение получено, информация передана в соответствующие службы.";

fn seed_messages(now: DateTime<Utc>) -> Vec<ChatMessage> {
    vec![
        ChatMessage::from_centre(
            1,
            "Добрый день, оперативная группа на связи.".to_string(),
            now - chrono::Duration::minutes(10),
        ),
        ChatMessage::from_operator(
            2,
            "Получил сообщение о происшествии на ул. Ленина. Выдвигаюсь на место.".to_string(),
            now - chrono::Duration::minutes(9),
        ),
        ChatMessage::from_centre(
            3,
            "Принято. Держите нас в курсе ситуации. Вам в помощь направлена дополнительная группа."
                .to_string(),
            now - chrono::Duration::minutes(8),
        ),
    ]
}

pub struct ChatService {
    messages: RwLock<Vec<ChatMessage>>,
    next_id: AtomicU64,
    reply_delay: Duration,
}

impl ChatService {
    pub fn new(config: &ChatConfig, now: DateTime<Utc>) -> Arc<Self> {
        let messages = seed_messages(now);
        let next_id = messages.len() as u64 + 1;

        Arc::new(Self {
            messages: RwLock::new(messages),
            next_id: AtomicU64::new(next_id),
            reply_delay: config.reply_delay,
        })
    }

    /// Conversation in chronological order
    pub fn list(&self) -> Vec<ChatMessage> {
        self.messages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, message: ChatMessage) {
        self.messages
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message);
    }

    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Append an operator message and schedule the centre's reply.
    ///
    /// Must be called from within a tokio runtime.
    pub fn send(self: &Arc<Self>, text: &str) -> Result<ChatMessage> {
        if text.trim().is_empty() {
            return Err(AppError::Validation("Message text is required".to_string()));
        }

        let message = ChatMessage::from_operator(self.allocate_id(), text.to_string(), Utc::now());
        self.push(message.clone());
        tracing::debug!("Chat message {} sent", message.id);

        let chat = Arc::downgrade(self);
        let delay = self.reply_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Service gone means the app is shutting down
            if let Some(chat) = chat.upgrade() {
                let reply =
                    ChatMessage::from_centre(chat.allocate_id(), CANNED_REPLY.to_string(), Utc::now());
                tracing::debug!("Chat reply {} delivered", reply.id);
                chat.push(reply);
            }
        });

        Ok(message)
    }
}

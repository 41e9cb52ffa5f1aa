use chrono::{DateTime, Utc};

const CENTRE_SENDER: &str = "Диспетчер Центра";
const OPERATOR_SENDER: &str = "Вы";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    /// Sent by the operator rather than the centre
    pub is_me: bool,
}

impl ChatMessage {
    pub fn from_operator(id: u64, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            sender: OPERATOR_SENDER.to_string(),
            text,
            timestamp,
            is_me: true,
        }
    }

    pub fn from_centre(id: u64, text: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            sender: CENTRE_SENDER.to_string(),
            text,
            timestamp,
            is_me: false,
        }
    }
}

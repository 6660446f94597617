use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A conversation between matched users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: String,
    pub participant_ids: Vec<String>,
    pub last_message: Option<ChatMessage>,
    pub unread_count: u32,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Chat {
    /// The participant that is not `user_id`
    pub fn other_participant(&self, user_id: &str) -> Option<&str> {
        self.participant_ids
            .iter()
            .map(String::as_str)
            .find(|id| *id != user_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

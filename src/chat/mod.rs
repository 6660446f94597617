//! Chats between matches
//!
//! There is no chat backend yet: this provider serves fixtures in both
//! modes.

mod types;

use chrono::Utc;
use log::debug;
use tunematch_gateway::ApiResponse;
use uuid::Uuid;

use crate::backend::{find_by_id, Backend};
use crate::fixtures;

pub use types::*;

#[derive(Debug, Clone)]
pub struct ChatApi {
    backend: Backend,
}

impl ChatApi {
    pub(crate) fn new(backend: Backend) -> Self {
        Self { backend }
    }

    fn note_mock_only(&self, operation: &str) {
        if !self.backend.is_mock() {
            debug!("chat.{} has no live backend, serving fixtures", operation);
        }
    }

    /// Chats of the signed-in user, most recently updated first
    pub async fn get_chats(&self) -> ApiResponse<Vec<Chat>> {
        self.note_mock_only("get_chats");
        let mut chats = fixtures::chats();
        chats.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        ApiResponse::ok(chats)
    }

    pub async fn get_chat_by_id(&self, id: &str) -> ApiResponse<Chat> {
        self.note_mock_only("get_chat_by_id");
        ApiResponse::from_option(find_by_id(fixtures::chats(), id, |c| &c.id))
    }

    /// Messages of a chat in send order; empty for an unknown chat
    pub async fn get_messages(&self, chat_id: &str) -> ApiResponse<Vec<ChatMessage>> {
        self.note_mock_only("get_messages");
        let mut messages: Vec<ChatMessage> = fixtures::chat_messages()
            .into_iter()
            .filter(|m| m.chat_id == chat_id)
            .collect();
        messages.sort_by(|a, b| a.sent_at.cmp(&b.sent_at));
        ApiResponse::ok(messages)
    }

    /// Compose a message from the signed-in user; `data: None` for an unknown chat
    pub async fn send_message(&self, chat_id: &str, text: &str) -> ApiResponse<ChatMessage> {
        self.note_mock_only("send_message");
        let chat = find_by_id(fixtures::chats(), chat_id, |c| &c.id);
        ApiResponse::from_option(chat.map(|chat| ChatMessage {
            id: Uuid::new_v4().to_string(),
            chat_id: chat.id,
            sender_id: fixtures::CURRENT_USER_ID.to_string(),
            text: text.trim().to_string(),
            sent_at: Utc::now(),
            read: false,
        }))
    }
}

//! Chat assistant DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Metadata, V1MessageType};
use crate::assistant::{format_message_html, ChatSession};
use crate::models::ChatMessage;

/// Request body for `POST /v1/chat/sessions/{sessionId}/messages`.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// The visitor's message. Surrounding whitespace is trimmed.
    pub content: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    pub id: String,
    pub content: String,
    /// `content` with `**bold**` and newlines rendered as HTML.
    pub html: String,
    pub is_user: bool,
    #[schema(value_type = String)]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub message_type: V1MessageType,
    /// CSS class for the message bubble.
    pub css_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub metadata: Option<Metadata>,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(msg: ChatMessage) -> Self {
        Self {
            html: format_message_html(&msg.content),
            css_class: msg.css_class().to_string(),
            id: msg.id,
            content: msg.content,
            is_user: msg.is_user,
            timestamp: msg.timestamp,
            message_type: msg.message_type.into(),
            metadata: msg.metadata,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionResponse {
    /// Session ID (UUID v4).
    pub session_id: String,
    pub is_open: bool,
    pub is_typing: bool,
    pub messages: Vec<ChatMessageResponse>,
}

impl ChatSessionResponse {
    pub fn new(session_id: String, session: &ChatSession) -> Self {
        Self {
            session_id,
            is_open: session.is_open(),
            is_typing: session.is_typing(),
            messages: session
                .messages()
                .iter()
                .cloned()
                .map(ChatMessageResponse::from)
                .collect(),
        }
    }
}

/// The user message and the reply appended by one send.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub messages: Vec<ChatMessageResponse>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ToggleChatResponse {
    pub is_open: bool,
}

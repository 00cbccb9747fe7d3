use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Metadata, MessageType};

/// One entry of a chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub is_user: bool,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: nanoid::nanoid!(),
            content: content.into(),
            is_user: true,
            timestamp: Utc::now(),
            message_type: MessageType::Text,
            metadata: None,
        }
    }

    pub fn assistant(content: impl Into<String>, message_type: MessageType) -> Self {
        Self {
            id: nanoid::nanoid!(),
            content: content.into(),
            is_user: false,
            timestamp: Utc::now(),
            message_type,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, key: &str, value: serde_json::Value) -> Self {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.to_string(), value);
        self
    }

    /// CSS class a client uses for this bubble.
    pub fn css_class(&self) -> &'static str {
        if self.is_user {
            return "user-message";
        }
        match self.message_type {
            MessageType::Error => "error-message",
            MessageType::ProjectRecommendation => "recommendation-message",
            MessageType::SkillAnalysis => "analysis-message",
            MessageType::Text => "ai-message",
        }
    }
}

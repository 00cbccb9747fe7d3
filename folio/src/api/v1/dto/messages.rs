//! Contact message DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models;

/// Request body for `POST /v1/messages`: the four contact form fields.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessageRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<SubmitMessageRequest> for models::ContactForm {
    fn from(req: SubmitMessageRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            subject: req.subject,
            message: req.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    /// Message ID (nanoid, 21 chars).
    pub message_id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl From<models::ContactMessage> for MessageResponse {
    fn from(msg: models::ContactMessage) -> Self {
        Self {
            message_id: msg.id,
            name: msg.name,
            email: msg.email,
            subject: msg.subject,
            message: msg.message,
            created_at: msg.created_at,
            read: msg.read,
        }
    }
}

/// Response for a successful `POST /v1/messages`.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMessageResponse {
    /// Notice to show the visitor.
    pub notice: String,
    pub message: MessageResponse,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListMessagesResponse {
    pub messages: Vec<MessageResponse>,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadResponse {
    pub message_id: String,
    pub read: bool,
}

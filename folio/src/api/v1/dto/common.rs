//! Shared DTO types used across multiple v1 API endpoints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{ContentType, MessageType, Priority};

/// Arbitrary key-value pairs.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Kind of a chat message.
///
/// Wire format: `"text"`, `"project_recommendation"`, `"skill_analysis"` or `"error"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum V1MessageType {
    Text,
    ProjectRecommendation,
    SkillAnalysis,
    Error,
}

impl From<MessageType> for V1MessageType {
    fn from(kind: MessageType) -> Self {
        match kind {
            MessageType::Text => V1MessageType::Text,
            MessageType::ProjectRecommendation => V1MessageType::ProjectRecommendation,
            MessageType::SkillAnalysis => V1MessageType::SkillAnalysis,
            MessageType::Error => V1MessageType::Error,
        }
    }
}

/// Kind of generated content.
///
/// Wire format: `"project_description"`, `"skill_analysis"`,
/// `"resume_section"` or `"cover_letter"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum V1ContentType {
    ProjectDescription,
    SkillAnalysis,
    ResumeSection,
    CoverLetter,
}

impl From<ContentType> for V1ContentType {
    fn from(kind: ContentType) -> Self {
        match kind {
            ContentType::ProjectDescription => V1ContentType::ProjectDescription,
            ContentType::SkillAnalysis => V1ContentType::SkillAnalysis,
            ContentType::ResumeSection => V1ContentType::ResumeSection,
            ContentType::CoverLetter => V1ContentType::CoverLetter,
        }
    }
}

impl From<V1ContentType> for ContentType {
    fn from(kind: V1ContentType) -> Self {
        match kind {
            V1ContentType::ProjectDescription => ContentType::ProjectDescription,
            V1ContentType::SkillAnalysis => ContentType::SkillAnalysis,
            V1ContentType::ResumeSection => ContentType::ResumeSection,
            V1ContentType::CoverLetter => ContentType::CoverLetter,
        }
    }
}

/// Wire format: `"high"`, `"medium"` or `"low"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum V1Priority {
    High,
    Medium,
    Low,
}

impl From<Priority> for V1Priority {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => V1Priority::High,
            Priority::Medium => V1Priority::Medium,
            Priority::Low => V1Priority::Low,
        }
    }
}

/// Response for delete endpoints.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub id: String,
    pub deleted: bool,
}

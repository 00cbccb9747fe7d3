//! DTOs for the assistant tools: skill analyzer, resume builder, project
//! ideas and the content generator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{V1ContentType, V1Priority};
use crate::models;

// ---------------------------------------------------------------------------
// Skill analyzer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysisRequest {
    pub skill: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillAnalysisResponse {
    /// e.g. `ANGULAR Analysis`
    pub title: String,
    pub content: String,
    pub priority: V1Priority,
}

// ---------------------------------------------------------------------------
// Resume builder
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    /// Optional job description to tailor both documents to.
    #[serde(default)]
    pub job_description: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponse {
    pub resume: String,
    pub cover_letter: String,
}

// ---------------------------------------------------------------------------
// Project ideas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdeasRequest {
    /// Free-form interests, e.g. `"react, python and AI"`.
    #[serde(default)]
    pub interests: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdeaResponse {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub reason: String,
    /// 0-100
    pub match_score: u8,
}

impl From<models::ProjectRecommendation> for ProjectIdeaResponse {
    fn from(rec: models::ProjectRecommendation) -> Self {
        Self {
            title: rec.title,
            description: rec.description,
            technologies: rec.technologies,
            reason: rec.reason,
            match_score: rec.match_score,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdeasResponse {
    /// Tokens the interests were split into.
    pub keywords: Vec<String>,
    pub ideas: Vec<ProjectIdeaResponse>,
}

// ---------------------------------------------------------------------------
// Content generator
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(rename = "type")]
    pub content_type: V1ContentType,
    pub input: String,
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContentResponse {
    #[serde(rename = "type")]
    pub content_type: V1ContentType,
    pub title: String,
    pub content: String,
    #[schema(value_type = String)]
    pub timestamp: DateTime<Utc>,
}

impl From<models::GeneratedContent> for GeneratedContentResponse {
    fn from(item: models::GeneratedContent) -> Self {
        Self {
            content_type: item.content_type.into(),
            title: item.title,
            content: item.content,
            timestamp: item.timestamp,
        }
    }
}

/// The content library, newest first.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentLibraryResponse {
    pub items: Vec<GeneratedContentResponse>,
}

//! Project request/response DTOs for the v1 API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for `POST /v1/projects`.
#[derive(Debug, Clone, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 10000))]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl From<CreateProjectRequest> for models::NewProject {
    fn from(req: CreateProjectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            technologies: req.technologies,
            image_url: req.image_url,
            github_url: req.github_url,
            live_url: req.live_url,
        }
    }
}

/// Request body for `PATCH /v1/projects/{projectId}`. Omitted fields are kept.
#[derive(Debug, Clone, Default, Deserialize, Validate, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl From<UpdateProjectRequest> for models::ProjectPatch {
    fn from(req: UpdateProjectRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            technologies: req.technologies,
            image_url: req.image_url,
            github_url: req.github_url,
            live_url: req.live_url,
        }
    }
}

/// Query parameters for `GET /v1/projects`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsQuery {
    /// Technology to filter on (case-insensitive), or `all`.
    pub filter: Option<String>,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    /// Project ID (nanoid, 21 chars).
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
    #[schema(value_type = String)]
    pub updated_at: DateTime<Utc>,
}

impl From<models::Project> for ProjectResponse {
    fn from(project: models::Project) -> Self {
        Self {
            project_id: project.id,
            title: project.title,
            description: project.description,
            technologies: project.technologies,
            image_url: project.image_url,
            github_url: project.github_url,
            live_url: project.live_url,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

/// Response for `GET /v1/projects`, newest first.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsResponse {
    /// The filter that was applied (`all` when none).
    pub filter: String,
    pub projects: Vec<ProjectResponse>,
}

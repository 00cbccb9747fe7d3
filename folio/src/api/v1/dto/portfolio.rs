use serde::Serialize;

use crate::models;

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioProjectResponse {
    pub title: String,
    pub technologies: Vec<String>,
    pub description: String,
}

/// The portfolio record every assistant answer and export is built from.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    pub name: String,
    pub title: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub projects: Vec<PortfolioProjectResponse>,
    pub interests: Vec<String>,
}

impl From<&models::Portfolio> for PortfolioResponse {
    fn from(p: &models::Portfolio) -> Self {
        Self {
            name: p.name.clone(),
            title: p.title.clone(),
            skills: p.skills.clone(),
            experience: p.experience.clone(),
            projects: p
                .projects
                .iter()
                .map(|pr| PortfolioProjectResponse {
                    title: pr.title.clone(),
                    technologies: pr.technologies.clone(),
                    description: pr.description.clone(),
                })
                .collect(),
            interests: p.interests.clone(),
        }
    }
}

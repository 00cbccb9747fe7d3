use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A portfolio project as stored in the `projects` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    #[cfg(test)]
    pub(crate) fn new(id: String, title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description,
            technologies: Vec::new(),
            image_url: None,
            github_url: None,
            live_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive check against the project's technology list.
    pub fn uses_technology(&self, technology: &str) -> bool {
        let wanted = technology.to_lowercase();
        self.technologies
            .iter()
            .any(|t| t.to_lowercase() == wanted)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewProject {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(max = 10_000))]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

/// Partial update; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
}

impl ProjectPatch {
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
        if let Some(technologies) = self.technologies {
            project.technologies = technologies;
        }
        if self.image_url.is_some() {
            project.image_url = self.image_url;
        }
        if self.github_url.is_some() {
            project.github_url = self.github_url;
        }
        if self.live_url.is_some() {
            project.live_url = self.live_url;
        }
    }
}

/// Filter applied to an already-loaded project list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Technology(String),
}

impl ProjectFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::All,
            Some(v) if v.eq_ignore_ascii_case("all") => Self::All,
            Some(v) => Self::Technology(v.to_string()),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Technology(tech) => project.uses_technology(tech),
        }
    }

    /// Keeps the input ordering.
    pub fn apply(&self, projects: &[Project]) -> Vec<Project> {
        projects
            .iter()
            .filter(|p| self.matches(p))
            .cloned()
            .collect()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    #[default]
    ProjectDescription,
    SkillAnalysis,
    ResumeSection,
    CoverLetter,
}

impl ContentType {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ProjectDescription => "Project Description",
            Self::SkillAnalysis => "Skill Analysis",
            Self::ResumeSection => "Resume Section",
            Self::CoverLetter => "Cover Letter",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProjectDescription => write!(f, "project_description"),
            Self::SkillAnalysis => write!(f, "skill_analysis"),
            Self::ResumeSection => write!(f, "resume_section"),
            Self::CoverLetter => write!(f, "cover_letter"),
        }
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project_description" => Ok(Self::ProjectDescription),
            "skill_analysis" => Ok(Self::SkillAnalysis),
            "resume_section" => Ok(Self::ResumeSection),
            "cover_letter" => Ok(Self::CoverLetter),
            _ => Err(format!("Unknown content type: {s}")),
        }
    }
}

/// An item of the generated content library.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedContent {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub title: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl GeneratedContent {
    pub fn new(content_type: ContentType, content: String) -> Self {
        Self {
            content_type,
            title: content_type.title().to_string(),
            content,
            timestamp: Utc::now(),
        }
    }
}

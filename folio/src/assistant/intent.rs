use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::Portfolio;

static SKILLS_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(what\s+skills|your\s+skills|skills\s+do\s+you\s+have|list\s+skills)")
        .expect("skills pattern is valid")
});

static EXPERIENCE_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(how\s+long|years\s+of\s+experience|experience\s+do\s+you\s+have|total\s+experience)",
    )
    .expect("experience pattern is valid")
});

static DETAILS_REQUEST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"tell\s+me\s+about\s+|details\s+about\s+").expect("details pattern is valid")
});

/// What a chat message is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SkillsQuestion,
    ExperienceQuestion,
    ProjectDetails,
    ProjectRecommendation,
    ProjectInquiry,
    SkillAnalysis,
    GeneralQuestion,
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::SkillsQuestion => "skills_question",
            Self::ExperienceQuestion => "experience_question",
            Self::ProjectDetails => "project_details",
            Self::ProjectRecommendation => "project_recommendation",
            Self::ProjectInquiry => "project_inquiry",
            Self::SkillAnalysis => "skill_analysis",
            Self::GeneralQuestion => "general_question",
        };
        f.write_str(name)
    }
}

/// Classifies a message. The first matching rule wins:
///
/// 1. direct skills question
/// 2. direct experience question
/// 3. names a known project, or asks "tell me about" / "details about"
/// 4. asks for a recommendation or suggestion
/// 5. mentions projects, work or the portfolio
/// 6. mentions skills, learning or improving
/// 7. anything else
pub fn classify(text: &str, portfolio: &Portfolio) -> Intent {
    let lower = text.to_lowercase();
    if lower.trim().is_empty() {
        return Intent::GeneralQuestion;
    }

    if SKILLS_QUESTION.is_match(&lower) {
        return Intent::SkillsQuestion;
    }
    if EXPERIENCE_QUESTION.is_match(&lower) {
        return Intent::ExperienceQuestion;
    }

    let names_project = portfolio
        .project_titles()
        .any(|title| lower.contains(&title.to_lowercase()));
    if names_project || DETAILS_REQUEST.is_match(&lower) {
        return Intent::ProjectDetails;
    }

    if contains_any(&lower, &["recommend", "suggest", "what should"]) {
        return Intent::ProjectRecommendation;
    }
    if contains_any(&lower, &["project", "work", "portfolio"]) {
        return Intent::ProjectInquiry;
    }
    if contains_any(&lower, &["skill", "learn", "improve"]) {
        return Intent::SkillAnalysis;
    }

    Intent::GeneralQuestion
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

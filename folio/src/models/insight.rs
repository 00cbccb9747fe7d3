use serde::{Deserialize, Serialize};

use super::Priority;

/// A suggested project idea with the reason it matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectRecommendation {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub reason: String,
    pub match_score: u8,
}

/// Canned assessment of one skill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillAnalysis {
    pub skill: String,
    pub content: String,
    pub priority: Priority,
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type Metadata = HashMap<String, serde_json::Value>;

/// Kind of a chat transcript entry. Drives how a client styles the bubble.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    #[default]
    Text,
    ProjectRecommendation,
    SkillAnalysis,
    Error,
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::ProjectRecommendation => write!(f, "project_recommendation"),
            Self::SkillAnalysis => write!(f, "skill_analysis"),
            Self::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "project_recommendation" => Ok(Self::ProjectRecommendation),
            "skill_analysis" => Ok(Self::SkillAnalysis),
            "error" => Ok(Self::Error),
            _ => Err(format!("Unknown message type: {s}")),
        }
    }
}

/// Priority attached to a skill analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_type_display_matches_serde() {
        for kind in [
            MessageType::Text,
            MessageType::ProjectRecommendation,
            MessageType::SkillAnalysis,
            MessageType::Error,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, kind.to_string());
        }
    }

    #[test]
    fn message_type_from_str_rejects_unknown() {
        assert_eq!(
            "Skill_Analysis".parse::<MessageType>().unwrap(),
            MessageType::SkillAnalysis
        );
        assert!("banner".parse::<MessageType>().is_err());
    }
}

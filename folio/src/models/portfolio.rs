use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

use crate::error::{FolioError, Result};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// The static profile record every assistant reply and export is built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    pub skills: Vec<String>,
    pub experience: String,
    pub projects: Vec<PortfolioProject>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortfolioProject {
    pub title: String,
    pub technologies: Vec<String>,
    pub description: String,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            name: "Raghav Bharadwaj".to_string(),
            title: "Full Stack Developer".to_string(),
            skills: strings(&[
                "Angular",
                "React",
                "Node.js",
                "TypeScript",
                "Firebase",
                "Python",
                "AI/ML",
            ]),
            experience: "5+ years".to_string(),
            projects: vec![
                PortfolioProject {
                    title: "E-Commerce Platform".to_string(),
                    technologies: strings(&["Angular", "Firebase", "Stripe"]),
                    description: "Full-featured e-commerce solution".to_string(),
                },
                PortfolioProject {
                    title: "AI-Powered Portfolio".to_string(),
                    technologies: strings(&["Angular", "OpenAI", "Firebase"]),
                    description: "Interactive portfolio with AI assistant".to_string(),
                },
            ],
            interests: strings(&["Web Development", "AI/ML", "Cloud Computing", "Open Source"]),
        }
    }
}

impl Portfolio {
    /// Loads a portfolio record from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let portfolio: Portfolio = serde_json::from_str(&raw)?;
        if portfolio.name.trim().is_empty() {
            return Err(FolioError::Validation(
                "Portfolio name cannot be empty".to_string(),
            ));
        }
        Ok(portfolio)
    }

    /// Name with whitespace runs collapsed to `-`, lower-cased.
    pub fn slug(&self) -> String {
        WHITESPACE_RUN.replace_all(&self.name, "-").to_lowercase()
    }

    pub fn project_titles(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.title.as_str())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

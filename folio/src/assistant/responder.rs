use crate::error::{FolioError, Result};
use crate::models::{ChatMessage, MessageType, Portfolio, PortfolioProject};

use super::intent::{classify, Intent};
use super::keywords::{extract_keywords, title_tokens};
use super::recommendations::recommend_projects;
use super::skills::analyze_skill;

/// Builds the assistant's reply to one user message.
pub fn respond(message: &str, portfolio: &Portfolio) -> Result<ChatMessage> {
    let intent = classify(message, portfolio);
    let keywords = extract_keywords(message, portfolio);
    tracing::debug!(%intent, ?keywords, "Classified chat message");

    match intent {
        Intent::ProjectInquiry => project_inquiry(&keywords, portfolio),
        Intent::SkillAnalysis => skill_analysis(&keywords, portfolio),
        Intent::SkillsQuestion => Ok(skills_question(portfolio)),
        Intent::ExperienceQuestion => Ok(experience_question(portfolio)),
        Intent::ProjectDetails => project_details(message, portfolio),
        Intent::ProjectRecommendation => project_recommendation(&keywords),
        Intent::GeneralQuestion => general_question(portfolio),
    }
}

fn bullet(project: &PortfolioProject) -> String {
    format!(
        "• **{}**: {} ({})",
        project.title,
        project.description,
        project.technologies.join(", ")
    )
}

fn bullets<'a>(projects: impl IntoIterator<Item = &'a PortfolioProject>) -> String {
    projects.into_iter().map(bullet).collect::<Vec<_>>().join("\n")
}

fn project_inquiry(keywords: &[String], portfolio: &Portfolio) -> Result<ChatMessage> {
    let relevant: Vec<&PortfolioProject> = portfolio
        .projects
        .iter()
        .filter(|project| {
            keywords.iter().any(|keyword| {
                project
                    .technologies
                    .iter()
                    .any(|tech| tech.to_lowercase().contains(keyword.as_str()))
            })
        })
        .collect();

    if relevant.is_empty() {
        let content = format!(
            "Here are all my projects:\n\n{}\n\nWhich one interests you most?",
            bullets(&portfolio.projects)
        );
        return Ok(
            ChatMessage::assistant(content, MessageType::ProjectRecommendation)
                .with_metadata("projects", serde_json::to_value(&portfolio.projects)?),
        );
    }

    let content = format!(
        "Based on your interest in {}, here are some relevant projects:\n\n{}\n\nWould you like to know more about any specific project?",
        keywords.join(", "),
        bullets(relevant.iter().copied())
    );
    Ok(
        ChatMessage::assistant(content, MessageType::ProjectRecommendation)
            .with_metadata("projects", serde_json::to_value(&relevant)?),
    )
}

fn skill_analysis(keywords: &[String], portfolio: &Portfolio) -> Result<ChatMessage> {
    let mentioned = keywords.iter().find(|keyword| {
        portfolio
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(keyword.as_str()))
    });

    match mentioned {
        Some(skill) => {
            let analysis = analyze_skill(skill);
            let content = format!(
                "**{} Analysis:**\n\n{}",
                skill.to_uppercase(),
                analysis.content
            );
            Ok(ChatMessage::assistant(content, MessageType::SkillAnalysis)
                .with_metadata("analysis", serde_json::to_value(&analysis)?))
        }
        None => Ok(ChatMessage::assistant(
            format!(
                "I have experience with: {}\n\nWhich skill would you like me to analyze or discuss?",
                portfolio.skills.join(", ")
            ),
            MessageType::Text,
        )),
    }
}

fn skills_question(portfolio: &Portfolio) -> ChatMessage {
    ChatMessage::assistant(
        format!(
            "My core skills include: {}.\n\nYou can ask for an analysis of any skill to see strengths, growth areas, and resources.",
            portfolio.skills.join(", ")
        ),
        MessageType::Text,
    )
}

fn experience_question(portfolio: &Portfolio) -> ChatMessage {
    ChatMessage::assistant(
        format!(
            "I have {} of professional experience as a {}.",
            portfolio.experience, portfolio.title
        ),
        MessageType::Text,
    )
}

fn project_details(message: &str, portfolio: &Portfolio) -> Result<ChatMessage> {
    let lower = message.to_lowercase();

    // Highest token score wins; ties go to the earlier project.
    let best = portfolio
        .projects
        .iter()
        .map(|project| {
            let score = title_tokens(&project.title)
                .iter()
                .filter(|token| lower.contains(token.as_str()))
                .count();
            (project, score)
        })
        .fold(None, |best: Option<(&PortfolioProject, usize)>, candidate| {
            match best {
                Some((_, best_score)) if best_score >= candidate.1 => best,
                _ => Some(candidate),
            }
        });

    if let Some((project, score)) = best {
        if score > 0 {
            let content = format!(
                "**{}**\n{}\n\nTechnologies: {}\n\nWould you like to know about challenges, architecture, or results?",
                project.title,
                project.description,
                project.technologies.join(", ")
            );
            return Ok(ChatMessage::assistant(content, MessageType::Text)
                .with_metadata("project", serde_json::to_value(project)?));
        }
    }

    let listing = portfolio
        .projects
        .iter()
        .map(|p| format!("• **{}**: {}", p.title, p.description))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(ChatMessage::assistant(
        format!(
            "I couldn't identify the project. Here are my projects:\n\n{listing}\n\nPlease mention the project name for details."
        ),
        MessageType::Text,
    )
    .with_metadata("projects", serde_json::to_value(&portfolio.projects)?))
}

fn project_recommendation(keywords: &[String]) -> Result<ChatMessage> {
    let recommendations = recommend_projects(keywords);
    let listing = recommendations
        .iter()
        .map(|rec| {
            format!(
                "• **{}**: {}\n  *Why: {}*\n  *Match: {}%*",
                rec.title, rec.description, rec.reason, rec.match_score
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    Ok(ChatMessage::assistant(
        format!("**Project Recommendations:**\n\n{listing}"),
        MessageType::ProjectRecommendation,
    )
    .with_metadata("recommendations", serde_json::to_value(&recommendations)?))
}

fn general_question(portfolio: &Portfolio) -> Result<ChatMessage> {
    let first = portfolio.projects.first().ok_or_else(|| {
        FolioError::Assistant("Portfolio has no projects to suggest".to_string())
    })?;
    let titles = portfolio.project_titles().collect::<Vec<_>>().join(", ");

    let content = format!(
        "I'm a {} with {}.\nSkills: {}.\nProjects include {titles}.\nAsk me: \"What are your skills?\", \"Tell me about {}\", or \"How many years of experience do you have?\"",
        portfolio.title,
        portfolio.experience,
        portfolio.skills.join(", "),
        first.title
    );
    Ok(ChatMessage::assistant(content, MessageType::Text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reply(text: &str) -> ChatMessage {
        respond(text, &Portfolio::default()).unwrap()
    }

    #[test]
    fn skills_question_lists_skills() {
        let msg = reply("What are your skills?");
        assert_eq!(
            msg.content,
            "My core skills include: Angular, React, Node.js, TypeScript, Firebase, Python, AI/ML.\n\n\
             You can ask for an analysis of any skill to see strengths, growth areas, and resources."
        );
        assert_eq!(msg.message_type, MessageType::Text);
        assert!(!msg.is_user);
    }

    #[test]
    fn experience_question_uses_title() {
        assert_eq!(
            reply("How long have you been doing this?").content,
            "I have 5+ years of professional experience as a Full Stack Developer."
        );
    }

    #[test]
    fn project_details_picks_best_title_match() {
        let msg = reply("Tell me about E-Commerce Platform");
        assert!(msg.content.starts_with("**E-Commerce Platform**\nFull-featured e-commerce solution\n\n"));
        assert!(msg.content.contains("Technologies: Angular, Firebase, Stripe"));
        assert!(msg.metadata.unwrap().contains_key("project"));
    }

    #[test]
    fn project_details_without_match_lists_projects() {
        let portfolio = Portfolio {
            projects: vec![PortfolioProject {
                title: "Weather Station".to_string(),
                technologies: vec!["Rust".to_string()],
                description: "Sensor dashboard".to_string(),
            }],
            ..Portfolio::default()
        };

        let msg = respond("tell me about the chat bot", &portfolio).unwrap();
        assert_eq!(
            msg.content,
            "I couldn't identify the project. Here are my projects:\n\n\
             • **Weather Station**: Sensor dashboard\n\n\
             Please mention the project name for details."
        );
    }

    #[test]
    fn project_inquiry_filters_by_technology() {
        let msg = reply("Show me your firebase work");
        assert_eq!(msg.message_type, MessageType::ProjectRecommendation);
        assert!(msg.content.starts_with("Based on your interest in firebase, here are some relevant projects:"));
        assert!(msg.content.contains("• **E-Commerce Platform**: Full-featured e-commerce solution (Angular, Firebase, Stripe)"));
    }

    #[test]
    fn project_inquiry_without_keywords_lists_all() {
        let msg = reply("show me your work");
        assert!(msg.content.starts_with("Here are all my projects:\n\n"));
        assert!(msg.content.ends_with("\n\nWhich one interests you most?"));
    }

    #[test]
    fn skill_analysis_for_known_skill() {
        let msg = reply("How can I improve at angular?");
        assert_eq!(msg.message_type, MessageType::SkillAnalysis);
        assert!(msg
            .content
            .starts_with("**ANGULAR Analysis:**\n\n**Current Level**: Advanced"));
    }

    #[test]
    fn skill_analysis_without_skill_prompts() {
        let msg = reply("I want to learn something");
        assert_eq!(msg.message_type, MessageType::Text);
        assert!(msg.content.starts_with("I have experience with: Angular, React"));
    }

    #[test]
    fn recommendation_renders_catalog_entries() {
        let msg = reply("recommend a python project");
        assert_eq!(msg.message_type, MessageType::ProjectRecommendation);
        assert_eq!(
            msg.content,
            "**Project Recommendations:**\n\n\
             • **Real-time Analytics Dashboard**: Dashboard with real-time data visualization and AI insights\n  \
             *Why: Perfect for data visualization and AI integration*\n  *Match: 88%*"
        );
    }

    #[test]
    fn general_question_suggests_first_project() {
        let msg = reply("hello");
        assert!(msg.content.contains("Tell me about E-Commerce Platform"));
        assert!(msg.content.starts_with("I'm a Full Stack Developer with 5+ years.\n"));
    }

    #[test]
    fn general_question_without_projects_fails() {
        let portfolio = Portfolio {
            projects: Vec::new(),
            ..Portfolio::default()
        };
        assert!(matches!(
            respond("hello", &portfolio),
            Err(FolioError::Assistant(_))
        ));
    }
}

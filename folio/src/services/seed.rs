use std::collections::HashSet;

use crate::db::DatabaseBackend;
use crate::error::Result;
use crate::models::NewProject;

fn sample(
    title: &str,
    description: &str,
    technologies: &[&str],
    github: &str,
    live: &str,
) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: description.to_string(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        image_url: None,
        github_url: Some(format!("https://github.com/username/{github}")),
        live_url: Some(format!("https://{live}")),
    }
}

pub fn sample_projects() -> Vec<NewProject> {
    vec![
        sample(
            "E-Commerce Platform",
            "A full-featured e-commerce platform built with Angular, featuring user authentication, product catalog, shopping cart, and payment integration.",
            &["Angular", "TypeScript", "Firebase", "Stripe"],
            "ecommerce-platform",
            "ecommerce-demo.com",
        ),
        sample(
            "Task Management App",
            "A collaborative task management application with real-time updates, drag-and-drop functionality, and team collaboration features.",
            &["React", "Redux", "Socket.io", "MongoDB"],
            "task-manager",
            "taskmanager-demo.com",
        ),
        sample(
            "Weather Dashboard",
            "A responsive weather dashboard with location-based forecasts, interactive maps, and detailed weather analytics using multiple APIs.",
            &["JavaScript", "API", "Chart.js", "CSS3"],
            "weather-dashboard",
            "weather-demo.com",
        ),
        sample(
            "Personal Blog",
            "A modern blog platform with CMS functionality, markdown support, and SEO optimization built with Angular and Node.js.",
            &["Angular", "Node.js", "MongoDB", "Markdown"],
            "personal-blog",
            "blog-demo.com",
        ),
        sample(
            "Real-time Chat App",
            "A real-time messaging application with group chat, file sharing, and emoji reactions using WebSocket technology.",
            &["React", "Socket.io", "Express", "JWT"],
            "chat-app",
            "chat-demo.com",
        ),
        sample(
            "Memory Game",
            "An interactive memory card game with multiple difficulty levels, score tracking, and smooth animations using vanilla JavaScript.",
            &["JavaScript", "CSS3", "HTML5", "Canvas"],
            "memory-game",
            "memory-demo.com",
        ),
    ]
}

/// Adds every sample project whose title is not already stored. Returns the
/// number added.
pub async fn seed_sample_projects(db: &dyn DatabaseBackend) -> Result<usize> {
    let existing: HashSet<String> = db
        .list_projects()
        .await?
        .into_iter()
        .map(|p| p.title)
        .collect();

    let mut added = 0;
    for project in sample_projects() {
        if existing.contains(&project.title) {
            tracing::debug!(title = %project.title, "Sample project already present");
            continue;
        }
        let stored = db.add_project(project).await?;
        tracing::info!(id = %stored.id, title = %stored.title, "Added sample project");
        added += 1;
    }

    Ok(added)
}

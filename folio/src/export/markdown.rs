use crate::models::Portfolio;

/// Markdown resume: header, skills, projects and interests separated by rules.
pub fn render_markdown(portfolio: &Portfolio) -> String {
    let skills = portfolio.skills.join(", ");
    let mut lines: Vec<String> = vec![
        format!("# {}", portfolio.name),
        portfolio.title.clone(),
        String::new(),
        format!("> {} • Skills: {skills}", portfolio.experience),
        String::new(),
        "---".to_string(),
        String::new(),
        "## Skills".to_string(),
        String::new(),
    ];
    lines.extend(portfolio.skills.iter().map(|s| format!("- {s}")));

    lines.extend(section_break("## Projects"));
    for project in &portfolio.projects {
        lines.push(format!("### {}", project.title));
        lines.push(format!("Tech: {}", project.technologies.join(", ")));
        lines.push(String::new());
        lines.push(project.description.clone());
        lines.push(String::new());
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push("## Interests".to_string());
    lines.push(String::new());
    lines.extend(portfolio.interests.iter().map(|i| format!("- {i}")));

    lines.join("\n")
}

fn section_break(heading: &str) -> [String; 5] {
    [
        String::new(),
        "---".to_string(),
        String::new(),
        heading.to_string(),
        String::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_default_portfolio() {
        let expected = "\
# Raghav Bharadwaj
Full Stack Developer

> 5+ years • Skills: Angular, React, Node.js, TypeScript, Firebase, Python, AI/ML

---

## Skills

- Angular
- React
- Node.js
- TypeScript
- Firebase
- Python
- AI/ML

---

## Projects

### E-Commerce Platform
Tech: Angular, Firebase, Stripe

Full-featured e-commerce solution

### AI-Powered Portfolio
Tech: Angular, OpenAI, Firebase

Interactive portfolio with AI assistant

---

## Interests

- Web Development
- AI/ML
- Cloud Computing
- Open Source";

        assert_eq!(render_markdown(&Portfolio::default()), expected);
    }

    #[test]
    fn empty_lists_keep_section_headings() {
        let portfolio = Portfolio {
            skills: Vec::new(),
            projects: Vec::new(),
            interests: Vec::new(),
            ..Portfolio::default()
        };
        let md = render_markdown(&portfolio);
        assert!(md.contains("## Skills\n\n\n---\n\n## Projects\n\n---"));
        assert!(md.ends_with("## Interests\n"));
    }
}

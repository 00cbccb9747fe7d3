use crate::models::{Priority, SkillAnalysis};

/// Canned analysis for a skill. Lookup is case-insensitive; unknown skills get
/// a generic answer with the skill name echoed as given.
pub fn analyze_skill(skill: &str) -> SkillAnalysis {
    let (content, priority) = match skill.to_lowercase().as_str() {
        "angular" => (
            "**Current Level**: Advanced\n\
             **Strengths**: Component architecture, RxJS, state management\n\
             **Areas for Growth**: Angular Universal, Micro-frontends\n\
             **Resources**: Angular documentation, NgRx tutorials"
                .to_string(),
            Priority::High,
        ),
        "react" => (
            "**Current Level**: Intermediate\n\
             **Strengths**: Hooks, Context API, component composition\n\
             **Areas for Growth**: Server Components, Concurrent features\n\
             **Resources**: React 18 docs, Next.js tutorials"
                .to_string(),
            Priority::Medium,
        ),
        "ai" => (
            "**Current Level**: Learning\n\
             **Strengths**: Basic ML concepts, API integration\n\
             **Areas for Growth**: Deep learning, model training\n\
             **Resources**: TensorFlow tutorials, OpenAI docs"
                .to_string(),
            Priority::High,
        ),
        _ => (
            format!(
                "I'm continuously learning and improving my {skill} skills. \
                 What specific aspect would you like to discuss?"
            ),
            Priority::Medium,
        ),
    };

    SkillAnalysis {
        skill: skill.to_string(),
        content,
        priority,
    }
}

/// Title shown by the skill analyzer tool, e.g. `RUST Analysis`.
pub fn analysis_title(skill: &str) -> String {
    format!("{} Analysis", skill.to_uppercase())
}

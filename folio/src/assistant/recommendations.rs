use crate::models::ProjectRecommendation;

const MAX_RECOMMENDATIONS: usize = 3;

struct Idea {
    title: &'static str,
    description: &'static str,
    technologies: &'static [&'static str],
    reason: &'static str,
    match_score: u8,
}

const CATALOG: [Idea; 3] = [
    Idea {
        title: "AI-Powered E-commerce",
        description: "E-commerce platform with AI recommendations and chatbot",
        technologies: &["Angular", "Node.js", "OpenAI", "MongoDB"],
        reason: "Combines your interest in AI with e-commerce",
        match_score: 95,
    },
    Idea {
        title: "Real-time Analytics Dashboard",
        description: "Dashboard with real-time data visualization and AI insights",
        technologies: &["React", "D3.js", "WebSocket", "Python"],
        reason: "Perfect for data visualization and AI integration",
        match_score: 88,
    },
    Idea {
        title: "Smart Portfolio Generator",
        description: "AI-powered portfolio generator with dynamic content",
        technologies: &["Angular", "OpenAI", "Firebase", "TypeScript"],
        reason: "Leverages AI for content generation",
        match_score: 92,
    },
];

impl Idea {
    fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(&keyword))
    }

    fn to_recommendation(&self) -> ProjectRecommendation {
        ProjectRecommendation {
            title: self.title.to_string(),
            description: self.description.to_string(),
            technologies: self.technologies.iter().map(|t| t.to_string()).collect(),
            reason: self.reason.to_string(),
            match_score: self.match_score,
        }
    }
}

/// Catalog ideas with a technology containing any of the keywords, in
/// catalog order. No keywords means no recommendations.
pub fn recommend_projects<S: AsRef<str>>(keywords: &[S]) -> Vec<ProjectRecommendation> {
    CATALOG
        .iter()
        .filter(|idea| keywords.iter().any(|k| idea.matches(k.as_ref())))
        .take(MAX_RECOMMENDATIONS)
        .map(Idea::to_recommendation)
        .collect()
}

use std::sync::LazyLock;

use regex::Regex;

use crate::models::Portfolio;

/// Technology terms recognised in every message, in output order.
pub const TECH_KEYWORDS: [&str; 9] = [
    "angular",
    "react",
    "node",
    "python",
    "javascript",
    "typescript",
    "firebase",
    "ai",
    "ml",
];

static TITLE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("title split pattern is valid"));

static INTEREST_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9.#+]+").expect("interest split pattern is valid"));

/// Lower-cased alphanumeric tokens of a project title.
pub(crate) fn title_tokens(title: &str) -> Vec<String> {
    TITLE_SPLIT
        .split(&title.to_lowercase())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Technology terms followed by project title tokens longer than two
/// characters, first occurrence kept.
pub fn vocabulary(portfolio: &Portfolio) -> Vec<String> {
    let mut vocabulary: Vec<String> = TECH_KEYWORDS.iter().map(|k| k.to_string()).collect();
    for token in portfolio.project_titles().flat_map(title_tokens) {
        if token.len() > 2 && !vocabulary.contains(&token) {
            vocabulary.push(token);
        }
    }
    vocabulary
}

/// Vocabulary terms occurring anywhere in the lower-cased text.
///
/// Matching is plain substring containment, so "maintain" yields "ai".
pub fn extract_keywords(text: &str, portfolio: &Portfolio) -> Vec<String> {
    let lower = text.to_lowercase();
    vocabulary(portfolio)
        .into_iter()
        .filter(|term| lower.contains(term.as_str()))
        .collect()
}

/// Splits free-form interests into lower-cased tokens, keeping `.`, `#` and
/// `+` so that `node.js`, `c#` and `c++` survive.
pub fn tokenize(text: &str) -> Vec<String> {
    INTEREST_SPLIT
        .split(&text.to_lowercase())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn vocabulary_appends_long_title_tokens() {
        let vocabulary = vocabulary(&Portfolio::default());
        assert_eq!(
            &vocabulary[TECH_KEYWORDS.len()..],
            &["commerce", "platform", "powered", "portfolio"]
        );
    }

    #[test]
    fn extract_follows_vocabulary_order() {
        let keywords = extract_keywords("Python or REACT for my Angular app?", &Portfolio::default());
        assert_eq!(keywords, vec!["angular", "react", "python"]);
    }

    #[test]
    fn extract_matches_substrings() {
        let keywords = extract_keywords("I maintain javascript code", &Portfolio::default());
        // "maintain" contains "ai".
        assert_eq!(keywords, vec!["javascript", "ai"]);
    }

    #[test]
    fn extract_is_subset_of_vocabulary_and_complete() {
        let portfolio = Portfolio::default();
        let vocabulary = vocabulary(&portfolio);
        let text = "Typescript firebase ML e-commerce platform powered by node";
        let keywords = extract_keywords(text, &portfolio);

        for keyword in &keywords {
            assert!(vocabulary.contains(keyword));
        }
        for term in &vocabulary {
            if text.to_lowercase().contains(term.as_str()) {
                assert!(keywords.contains(term), "missing {term}");
            }
        }
    }

    #[test]
    fn extract_from_empty_text() {
        assert!(extract_keywords("", &Portfolio::default()).is_empty());
    }

    #[test]
    fn tokenize_keeps_symbolic_names() {
        assert_eq!(
            tokenize("C++, C# and Node.js / AI"),
            vec!["c++", "c#", "and", "node.js", "ai"]
        );
        assert!(tokenize("  ,, ").is_empty());
    }
}

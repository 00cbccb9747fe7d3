use folio::assistant::{classify, respond, ChatSession, Intent, WELCOME_MESSAGE};
use folio::models::{MessageType, Portfolio};
use pretty_assertions::assert_eq;

#[test]
fn test_conversation_flow() {
    let portfolio = Portfolio::default();
    let mut session = ChatSession::new();

    let replies = session.send("What skills do you have?", &portfolio);
    assert_eq!(replies.len(), 2);
    assert!(replies[0].is_user);
    assert!(replies[1].content.starts_with("My core skills include: Angular"));

    let replies = session.send("Tell me about the e-commerce platform", &portfolio);
    assert!(replies[1].content.contains("E-Commerce Platform"));
    assert_eq!(session.messages().len(), 5);

    for pair in session.messages().windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }

    session.clear();
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].content, WELCOME_MESSAGE);
    assert!(!session.is_typing());
}

#[test]
fn test_recommendation_reply_lists_ideas_with_match_scores() {
    let portfolio = Portfolio::default();

    let reply = respond("Can you suggest a project using react?", &portfolio).unwrap();

    assert_eq!(reply.message_type, MessageType::ProjectRecommendation);
    assert!(reply.content.starts_with("**Project Recommendations:**\n\n"));
    assert!(reply.content.contains("Real-time Analytics Dashboard"));
    assert!(reply.content.contains("*Match: 88%*"));
}

#[test]
fn test_skill_analysis_reply() {
    let portfolio = Portfolio::default();

    assert_eq!(
        classify("I want to improve my angular", &portfolio),
        Intent::SkillAnalysis
    );
    let reply = respond("I want to improve my angular", &portfolio).unwrap();
    assert_eq!(reply.message_type, MessageType::SkillAnalysis);
    assert!(reply.content.starts_with("**ANGULAR Analysis:**\n\n"));
}

#[test]
fn test_portfolio_without_projects_gets_apology() {
    let portfolio = Portfolio {
        projects: Vec::new(),
        ..Portfolio::default()
    };
    let mut session = ChatSession::new();

    let replies = session.send("hello there", &portfolio);

    assert_eq!(replies[1].message_type, MessageType::Error);
    assert!(!replies[1].is_user);
}

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;

use crate::models::{ChatMessage, MessageType, Portfolio};

use super::responder::respond;

pub const WELCOME_MESSAGE: &str = "Hi! I'm your AI portfolio assistant. I can help you explore my projects, analyze skills, recommend learning paths, or answer questions about my experience. What would you like to know?";

pub const APOLOGY_MESSAGE: &str =
    "I'm sorry, I encountered an error. Please try again or rephrase your question.";

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

/// One chat transcript plus the panel state a client shows it in.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    is_open: bool,
    is_typing: bool,
    #[serde(skip)]
    generation: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// A closed panel holding only the welcome message.
    pub fn new() -> Self {
        let mut session = Self {
            messages: Vec::new(),
            is_open: false,
            is_typing: false,
            generation: 0,
        };
        session.push(ChatMessage::assistant(WELCOME_MESSAGE, MessageType::Text));
        session
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Bumped by every [`clear`](Self::clear). A reply computed for an older
    /// generation belongs to a discarded transcript.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    pub fn set_typing(&mut self, typing: bool) {
        self.is_typing = typing;
    }

    /// Appends the user's message.
    pub fn push_user(&mut self, content: &str) -> &ChatMessage {
        self.push(ChatMessage::user(content))
    }

    /// Appends the reply to `content`. A failed reply becomes the apology
    /// message instead of an error.
    pub fn push_reply(&mut self, content: &str, portfolio: &Portfolio) -> &ChatMessage {
        let reply = match respond(content, portfolio) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "Assistant failed to answer");
                ChatMessage::assistant(APOLOGY_MESSAGE, MessageType::Error)
            }
        };
        self.push(reply)
    }

    /// User message then reply, as one turn. Returns the new messages.
    pub fn send(&mut self, content: &str, portfolio: &Portfolio) -> Vec<ChatMessage> {
        let user = self.push_user(content).clone();
        let reply = self.push_reply(content, portfolio).clone();
        vec![user, reply]
    }

    /// Drops the transcript back to the welcome message.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.is_typing = false;
        self.generation += 1;
        self.push(ChatMessage::assistant(WELCOME_MESSAGE, MessageType::Text));
    }

    fn push(&mut self, mut message: ChatMessage) -> &ChatMessage {
        if let Some(last) = self.messages.last() {
            message.timestamp = later(message.timestamp, last.timestamp);
        }
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }
}

fn later(a: DateTime<Utc>, b: DateTime<Utc>) -> DateTime<Utc> {
    if a >= b {
        a
    } else {
        b
    }
}

/// Renders `**bold**` as `<strong>` and newlines as `<br>`. The content is not
/// otherwise escaped.
pub fn format_message_html(content: &str) -> String {
    BOLD.replace_all(content, "<strong>$1</strong>")
        .replace('\n', "<br>")
}

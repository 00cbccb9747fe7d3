//! Rule-based portfolio assistant.
//!
//! Messages are classified by keyword rules and answered from fixed templates
//! filled with the portfolio record. There is no model behind it.

mod intent;
mod keywords;
mod recommendations;
mod responder;
mod session;
mod skills;
pub mod templates;

pub use intent::{classify, Intent};
pub use keywords::{extract_keywords, tokenize, vocabulary, TECH_KEYWORDS};
pub use recommendations::recommend_projects;
pub use responder::respond;
pub use session::{format_message_html, ChatSession, APOLOGY_MESSAGE, WELCOME_MESSAGE};
pub use skills::{analysis_title, analyze_skill};
pub use templates::{FixedPicker, RandomPicker, TemplatePicker};

mod chat;
mod common;
mod contact;
mod content;
mod insight;
mod portfolio;
mod project;

pub use chat::*;
pub use common::*;
pub use contact::*;
pub use content::*;
pub use insight::*;
pub use portfolio::*;
pub use project::*;

pub mod chat;
pub(crate) mod health;
pub mod messages;
pub mod portfolio;
pub mod projects;
pub mod tools;

pub use health::health_check;

//! v1 API Data Transfer Objects.
//!
//! Wire format for the v1 REST API, kept separate from the domain models in
//! `src/models/`.

pub mod chat;
pub mod common;
pub mod messages;
pub mod portfolio;
pub mod projects;
pub mod tools;

pub use chat::*;
pub use common::DeletedResponse;
pub use messages::*;
pub use portfolio::*;
pub use projects::*;
pub use tools::*;

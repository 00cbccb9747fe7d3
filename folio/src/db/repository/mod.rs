mod messages;
mod projects;
mod timestamps;

pub use messages::MessageRepository;
pub use projects::ProjectRepository;

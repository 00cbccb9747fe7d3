mod assistant;
mod contact;
mod content;
pub mod seed;

pub use assistant::AssistantService;
pub use contact::{ContactService, SubmitOutcome, SUBMIT_FAILURE, SUBMIT_SUCCESS};
pub use content::ContentService;

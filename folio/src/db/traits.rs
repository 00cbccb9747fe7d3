use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::error::Result;
use crate::models::{ContactForm, ContactMessage, NewProject, Project, ProjectPatch};

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

/// Store collections. Emitted on the change feed after every successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Messages,
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Projects => write!(f, "projects"),
            Self::Messages => write!(f, "messages"),
        }
    }
}

// ---------------------------------------------------------------------------
// Individual store traits
// ---------------------------------------------------------------------------

/// CRUD operations for the `projects` collection.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Assigns id and both timestamps.
    async fn add_project(&self, project: NewProject) -> Result<Project>;
    async fn get_project(&self, id: &str) -> Result<Option<Project>>;
    /// Newest first.
    async fn list_projects(&self) -> Result<Vec<Project>>;
    /// Refreshes `updated_at`. Fails with `NotFound` for unknown ids.
    async fn update_project(&self, id: &str, patch: ProjectPatch) -> Result<Project>;
    async fn delete_project(&self, id: &str) -> Result<bool>;
}

/// CRUD operations for the `messages` collection.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Stores the form as a new unread message stamped with the current time.
    async fn add_message(&self, form: ContactForm) -> Result<ContactMessage>;
    async fn get_message(&self, id: &str) -> Result<Option<ContactMessage>>;
    /// Newest first.
    async fn list_messages(&self) -> Result<Vec<ContactMessage>>;
    async fn mark_message_read(&self, id: &str) -> Result<bool>;
    async fn delete_message(&self, id: &str) -> Result<bool>;
}

// ---------------------------------------------------------------------------
// Unified backend supertrait
// ---------------------------------------------------------------------------

/// A complete document-store backend: both collections plus lifecycle and the
/// change feed that powers live queries.
#[async_trait]
pub trait DatabaseBackend: ProjectStore + MessageStore {
    /// Sync with remote (e.g. Turso replication). No-op for local-only backends.
    async fn sync(&self) -> Result<()>;

    /// New receiver on the write notification channel.
    fn changes(&self) -> broadcast::Receiver<Collection>;
}

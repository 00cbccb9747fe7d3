use async_trait::async_trait;
use chrono::Utc;
use nanoid::nanoid;
use tokio::sync::broadcast;

use crate::db::connection::Database;
use crate::db::repository::{MessageRepository, ProjectRepository};
use crate::db::traits::{Collection, DatabaseBackend, MessageStore, ProjectStore};
use crate::error::{FolioError, Result};
use crate::models::{ContactForm, ContactMessage, NewProject, Project, ProjectPatch};

const CHANGE_FEED_CAPACITY: usize = 64;

pub struct LibSqlBackend {
    db: Database,
    changes: broadcast::Sender<Collection>,
}

impl LibSqlBackend {
    pub fn new(db: Database) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self { db, changes }
    }

    fn notify(&self, collection: Collection) {
        // Err only means nobody is listening.
        let listeners = self.changes.send(collection).unwrap_or(0);
        tracing::trace!(%collection, listeners, "Change published");
    }
}

#[async_trait]
impl ProjectStore for LibSqlBackend {
    async fn add_project(&self, project: NewProject) -> Result<Project> {
        let now = Utc::now();
        let record = Project {
            id: nanoid!(),
            title: project.title,
            description: project.description,
            technologies: project.technologies,
            image_url: project.image_url,
            github_url: project.github_url,
            live_url: project.live_url,
            created_at: now,
            updated_at: now,
        };

        let conn = self.db.connect()?;
        ProjectRepository::create(&conn, &record).await?;
        self.notify(Collection::Projects);
        Ok(record)
    }

    async fn get_project(&self, id: &str) -> Result<Option<Project>> {
        let conn = self.db.connect()?;
        ProjectRepository::get_by_id(&conn, id).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let conn = self.db.connect()?;
        ProjectRepository::list(&conn).await
    }

    async fn update_project(&self, id: &str, patch: ProjectPatch) -> Result<Project> {
        let conn = self.db.connect()?;
        let mut project = ProjectRepository::get_by_id(&conn, id)
            .await?
            .ok_or_else(|| FolioError::NotFound(format!("Project {id} not found")))?;

        patch.apply_to(&mut project);
        project.updated_at = Utc::now();

        if !ProjectRepository::update(&conn, &project).await? {
            return Err(FolioError::NotFound(format!("Project {id} not found")));
        }
        self.notify(Collection::Projects);
        Ok(project)
    }

    async fn delete_project(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        let deleted = ProjectRepository::delete(&conn, id).await?;
        if deleted {
            self.notify(Collection::Projects);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl MessageStore for LibSqlBackend {
    async fn add_message(&self, form: ContactForm) -> Result<ContactMessage> {
        let message = ContactMessage::new(nanoid!(), form);

        let conn = self.db.connect()?;
        MessageRepository::create(&conn, &message).await?;
        self.notify(Collection::Messages);
        Ok(message)
    }

    async fn get_message(&self, id: &str) -> Result<Option<ContactMessage>> {
        let conn = self.db.connect()?;
        MessageRepository::get_by_id(&conn, id).await
    }

    async fn list_messages(&self) -> Result<Vec<ContactMessage>> {
        let conn = self.db.connect()?;
        MessageRepository::list(&conn).await
    }

    async fn mark_message_read(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        let updated = MessageRepository::mark_read(&conn, id).await?;
        if updated {
            self.notify(Collection::Messages);
        }
        Ok(updated)
    }

    async fn delete_message(&self, id: &str) -> Result<bool> {
        let conn = self.db.connect()?;
        let deleted = MessageRepository::delete(&conn, id).await?;
        if deleted {
            self.notify(Collection::Messages);
        }
        Ok(deleted)
    }
}

#[async_trait]
impl DatabaseBackend for LibSqlBackend {
    async fn sync(&self) -> Result<()> {
        self.db.sync().await
    }

    fn changes(&self) -> broadcast::Receiver<Collection> {
        self.changes.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    async fn setup_test_db() -> LibSqlBackend {
        use std::time::{SystemTime, UNIX_EPOCH};

        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let thread_id = std::thread::current().id();

        let config = DatabaseConfig {
            url: format!(
                "file:/tmp/folio_test_db_{thread_id:?}_{timestamp}?mode=memory&cache=shared"
            ),
            auth_token: None,
            local_path: None,
        };
        let db = Database::new(&config)
            .await
            .expect("Failed to create database");

        LibSqlBackend::new(db)
    }

    fn new_project(title: &str) -> NewProject {
        NewProject {
            title: title.to_string(),
            description: "A sample project".to_string(),
            technologies: vec!["Angular".to_string(), "Firebase".to_string()],
            image_url: None,
            github_url: Some("https://github.com/example/sample".to_string()),
            live_url: None,
        }
    }

    #[tokio::test]
    async fn test_add_project_assigns_id_and_timestamps() {
        let backend = setup_test_db().await;

        let project = backend.add_project(new_project("Shop")).await.unwrap();

        assert_eq!(project.id.len(), 21);
        assert_eq!(project.created_at, project.updated_at);
        assert_eq!(
            backend.get_project(&project.id).await.unwrap(),
            Some(project)
        );
    }

    #[tokio::test]
    async fn test_update_project_refreshes_updated_at() {
        let backend = setup_test_db().await;
        let project = backend.add_project(new_project("Shop")).await.unwrap();

        let updated = backend
            .update_project(
                &project.id,
                ProjectPatch {
                    title: Some("Storefront".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Storefront");
        assert_eq!(updated.created_at, project.created_at);
        assert!(updated.updated_at >= project.updated_at);
    }

    #[tokio::test]
    async fn test_update_unknown_project_is_not_found() {
        let backend = setup_test_db().await;

        let err = backend
            .update_project("missing", ProjectPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FolioError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_writes_publish_changes() {
        let backend = setup_test_db().await;
        let mut changes = backend.changes();

        let project = backend.add_project(new_project("Shop")).await.unwrap();
        assert_eq!(changes.recv().await.unwrap(), Collection::Projects);

        backend
            .add_message(ContactForm {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                subject: "Hi".to_string(),
                message: "Hello there".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(changes.recv().await.unwrap(), Collection::Messages);

        // A delete that removes nothing stays silent.
        assert!(!backend.delete_project("missing").await.unwrap());
        assert!(backend.delete_project(&project.id).await.unwrap());
        assert_eq!(changes.recv().await.unwrap(), Collection::Projects);
    }
}

use libsql::{params, Connection};

use super::timestamps;
use crate::error::Result;
use crate::models::Project;

const COLUMNS: &str =
    "id, title, description, technologies, image_url, github_url, live_url, created_at, updated_at";

pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create(conn: &Connection, project: &Project) -> Result<()> {
        conn.execute(
            &format!("INSERT INTO projects ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"),
            params![
                project.id.clone(),
                project.title.clone(),
                project.description.clone(),
                serde_json::to_string(&project.technologies)?,
                project.image_url.clone(),
                project.github_url.clone(),
                project.live_url.clone(),
                timestamps::encode(&project.created_at),
                timestamps::encode(&project.updated_at),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<Project>> {
        let mut rows = conn
            .query(
                &format!("SELECT {COLUMNS} FROM projects WHERE id = ?1"),
                params![id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::row_to_project(&row)?)),
            None => Ok(None),
        }
    }

    /// Newest first.
    pub async fn list(conn: &Connection) -> Result<Vec<Project>> {
        let mut rows = conn
            .query(
                &format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, rowid DESC"),
                (),
            )
            .await?;

        let mut projects = Vec::new();
        while let Some(row) = rows.next().await? {
            projects.push(Self::row_to_project(&row)?);
        }
        Ok(projects)
    }

    pub async fn update(conn: &Connection, project: &Project) -> Result<bool> {
        let affected = conn
            .execute(
                r#"
                UPDATE projects SET
                    title = ?2,
                    description = ?3,
                    technologies = ?4,
                    image_url = ?5,
                    github_url = ?6,
                    live_url = ?7,
                    updated_at = ?8
                WHERE id = ?1
                "#,
                params![
                    project.id.clone(),
                    project.title.clone(),
                    project.description.clone(),
                    serde_json::to_string(&project.technologies)?,
                    project.image_url.clone(),
                    project.github_url.clone(),
                    project.live_url.clone(),
                    timestamps::encode(&project.updated_at),
                ],
            )
            .await?;

        Ok(affected > 0)
    }

    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM projects WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    fn row_to_project(row: &libsql::Row) -> Result<Project> {
        Ok(Project {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            technologies: serde_json::from_str(&row.get::<String>(3)?).unwrap_or_default(),
            image_url: row.get(4)?,
            github_url: row.get(5)?,
            live_url: row.get(6)?,
            created_at: timestamps::decode(&row.get::<String>(7)?)?,
            updated_at: timestamps::decode(&row.get::<String>(8)?)?,
        })
    }
}

use libsql::{params, Connection};

use super::timestamps;
use crate::error::Result;
use crate::models::ContactMessage;

const COLUMNS: &str = "id, name, email, subject, message, created_at, read";

pub struct MessageRepository;

impl MessageRepository {
    pub async fn create(conn: &Connection, message: &ContactMessage) -> Result<()> {
        conn.execute(
            &format!("INSERT INTO messages ({COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)"),
            params![
                message.id.clone(),
                message.name.clone(),
                message.email.clone(),
                message.subject.clone(),
                message.message.clone(),
                timestamps::encode(&message.created_at),
                i64::from(message.read),
            ],
        )
        .await?;

        Ok(())
    }

    pub async fn get_by_id(conn: &Connection, id: &str) -> Result<Option<ContactMessage>> {
        let mut rows = conn
            .query(
                &format!("SELECT {COLUMNS} FROM messages WHERE id = ?1"),
                params![id],
            )
            .await?;

        match rows.next().await? {
            Some(row) => Ok(Some(Self::row_to_message(&row)?)),
            None => Ok(None),
        }
    }

    /// Newest first.
    pub async fn list(conn: &Connection) -> Result<Vec<ContactMessage>> {
        let mut rows = conn
            .query(
                &format!("SELECT {COLUMNS} FROM messages ORDER BY created_at DESC, rowid DESC"),
                (),
            )
            .await?;

        let mut messages = Vec::new();
        while let Some(row) = rows.next().await? {
            messages.push(Self::row_to_message(&row)?);
        }
        Ok(messages)
    }

    pub async fn mark_read(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn
            .execute("UPDATE messages SET read = 1 WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    pub async fn delete(conn: &Connection, id: &str) -> Result<bool> {
        let affected = conn
            .execute("DELETE FROM messages WHERE id = ?1", params![id])
            .await?;
        Ok(affected > 0)
    }

    fn row_to_message(row: &libsql::Row) -> Result<ContactMessage> {
        Ok(ContactMessage {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            subject: row.get(3)?,
            message: row.get(4)?,
            created_at: timestamps::decode(&row.get::<String>(5)?)?,
            read: row.get::<i64>(6)? != 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::init_schema;
    use crate::models::ContactForm;

    async fn setup_test_db() -> Connection {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .unwrap();
        let conn = db.connect().unwrap();
        init_schema(&conn).await.unwrap();
        conn
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Loved the portfolio".to_string(),
        }
    }

    #[tokio::test]
    async fn test_new_message_is_unread() {
        let conn = setup_test_db().await;
        let message = ContactMessage::new("m1".to_string(), form());

        MessageRepository::create(&conn, &message).await.unwrap();
        let loaded = MessageRepository::get_by_id(&conn, "m1")
            .await
            .unwrap()
            .unwrap();

        assert!(!loaded.read);
        assert_eq!(loaded, message);
    }

    #[tokio::test]
    async fn test_mark_read_flips_flag_once_stored() {
        let conn = setup_test_db().await;
        MessageRepository::create(&conn, &ContactMessage::new("m1".to_string(), form()))
            .await
            .unwrap();

        assert!(MessageRepository::mark_read(&conn, "m1").await.unwrap());
        assert!(!MessageRepository::mark_read(&conn, "nope").await.unwrap());

        let loaded = MessageRepository::list(&conn).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].read);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let conn = setup_test_db().await;
        MessageRepository::create(&conn, &ContactMessage::new("m1".to_string(), form()))
            .await
            .unwrap();

        assert!(MessageRepository::delete(&conn, "m1").await.unwrap());
        assert!(MessageRepository::list(&conn).await.unwrap().is_empty());
    }
}

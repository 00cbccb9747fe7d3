use chrono::Utc;
use folio::db::MessageStore;
use folio::models::ContactForm;
use folio::services::{ContactService, SUBMIT_FAILURE, SUBMIT_SUCCESS};

mod common;
use common::setup_backend;

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Ada Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        subject: "Collaboration".to_string(),
        message: "I enjoyed your analytics dashboard.".to_string(),
    }
}

#[tokio::test]
async fn test_submit_stores_one_unread_message() {
    let (db, _dir) = setup_backend().await;
    let service = ContactService::new(db.clone());

    let before = Utc::now();
    let mut form = filled_form();
    let outcome = service.submit(&mut form).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.notice, SUBMIT_SUCCESS);
    assert!(form.is_empty(), "form should be reset after a successful submit");

    let messages = db.list_messages().await.unwrap();
    assert_eq!(messages.len(), 1);
    let stored = &messages[0];
    assert_eq!(stored.name, "Ada Lovelace");
    assert_eq!(stored.email, "ada@example.com");
    assert_eq!(stored.subject, "Collaboration");
    assert!(!stored.read);
    assert!(stored.created_at >= before);
}

#[tokio::test]
async fn test_invalid_submit_keeps_form_and_stores_nothing() {
    let (db, _dir) = setup_backend().await;
    let service = ContactService::new(db.clone());

    let mut form = filled_form();
    form.message.clear();
    let outcome = service.submit(&mut form).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.notice, SUBMIT_FAILURE);
    assert_eq!(form.name, "Ada Lovelace", "form should survive a failed submit");
    assert!(db.list_messages().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_messages_listed_newest_first_and_marked_read() {
    let (db, _dir) = setup_backend().await;
    let service = ContactService::new(db.clone());

    let mut first = filled_form();
    first.subject = "First".to_string();
    let first_id = service.submit(&mut first).await.result.unwrap().id;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let mut second = filled_form();
    second.subject = "Second".to_string();
    service.submit(&mut second).await.result.unwrap();

    let subjects: Vec<String> = db
        .list_messages()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.subject)
        .collect();
    assert_eq!(subjects, vec!["Second", "First"]);

    assert!(db.mark_message_read(&first_id).await.unwrap());
    let first = db.get_message(&first_id).await.unwrap().unwrap();
    assert!(first.read);

    assert!(db.delete_message(&first_id).await.unwrap());
    assert!(!db.delete_message(&first_id).await.unwrap());
    assert_eq!(db.list_messages().await.unwrap().len(), 1);
}

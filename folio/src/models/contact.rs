use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A message left through the contact form, stored in the `messages` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl ContactMessage {
    /// Builds an unread message stamped with the current time.
    pub fn new(id: String, form: ContactForm) -> Self {
        Self {
            id,
            name: form.name,
            email: form.email,
            subject: form.subject,
            message: form.message,
            created_at: Utc::now(),
            read: false,
        }
    }
}

/// The four user-editable contact form fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 300))]
    pub subject: String,
    #[validate(length(min = 1, max = 10_000))]
    pub message: String,
}

impl ContactForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }
}

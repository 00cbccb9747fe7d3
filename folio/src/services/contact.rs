use std::sync::Arc;

use validator::Validate;

use crate::db::DatabaseBackend;
use crate::error::{FolioError, Result};
use crate::models::{ContactForm, ContactMessage};

pub const SUBMIT_SUCCESS: &str = "Thank you for your message! I'll get back to you soon.";
pub const SUBMIT_FAILURE: &str =
    "Sorry, there was an error sending your message. Please try again.";

/// Result of one contact form submit, plus the notice shown to the visitor.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub notice: &'static str,
    pub result: Result<ContactMessage>,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Clone)]
pub struct ContactService {
    db: Arc<dyn DatabaseBackend>,
}

impl ContactService {
    pub fn new(db: Arc<dyn DatabaseBackend>) -> Self {
        Self { db }
    }

    /// Stores the form as an unread message. The form is reset only on
    /// success, so a failed submit can be retried unchanged.
    pub async fn submit(&self, form: &mut ContactForm) -> SubmitOutcome {
        if let Err(e) = form.validate() {
            return SubmitOutcome {
                notice: SUBMIT_FAILURE,
                result: Err(FolioError::Validation(e.to_string())),
            };
        }

        match self.db.add_message(form.clone()).await {
            Ok(record) => {
                tracing::info!(message_id = %record.id, "Contact message stored");
                form.reset();
                SubmitOutcome {
                    notice: SUBMIT_SUCCESS,
                    result: Ok(record),
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to store contact message");
                SubmitOutcome {
                    notice: SUBMIT_FAILURE,
                    result: Err(e),
                }
            }
        }
    }
}

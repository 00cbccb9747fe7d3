use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lru::LruCache;
use uuid::Uuid;

use crate::assistant::ChatSession;
use crate::config::AssistantConfig;
use crate::error::{FolioError, Result};
use crate::models::{ChatMessage, Portfolio};

type SessionHandle = Arc<tokio::sync::Mutex<ChatSession>>;

/// Registry of live chat sessions.
///
/// Least recently used sessions are evicted once `max_sessions` is reached.
/// A send holds the session as "typing" across the reply delay; a second send
/// on the same session in that window is rejected with a conflict. Clearing
/// the session drops any reply still pending.
#[derive(Clone)]
pub struct AssistantService {
    sessions: Arc<Mutex<LruCache<String, SessionHandle>>>,
    portfolio: Arc<Portfolio>,
    response_delay: Duration,
}

impl AssistantService {
    pub fn new(portfolio: Arc<Portfolio>, config: &AssistantConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_sessions).unwrap_or(NonZeroUsize::MIN);
        Self {
            sessions: Arc::new(Mutex::new(LruCache::new(capacity))),
            portfolio,
            response_delay: Duration::from_millis(config.response_delay_ms),
        }
    }

    fn handle(&self, id: &str) -> Result<SessionHandle> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| FolioError::Internal("Session registry poisoned".to_string()))?;
        sessions
            .get(id)
            .cloned()
            .ok_or_else(|| FolioError::NotFound(format!("Chat session {id} not found")))
    }

    /// Opens a new session holding the welcome message.
    pub fn create_session(&self) -> Result<(String, ChatSession)> {
        let id = Uuid::new_v4().to_string();
        let session = ChatSession::new();

        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| FolioError::Internal("Session registry poisoned".to_string()))?;
        if let Some((evicted, _)) =
            sessions.push(id.clone(), Arc::new(tokio::sync::Mutex::new(session.clone())))
        {
            tracing::debug!(session_id = %evicted, "Evicted idle chat session");
        }
        tracing::info!(session_id = %id, "Chat session created");

        Ok((id, session))
    }

    pub async fn get_session(&self, id: &str) -> Result<ChatSession> {
        let handle = self.handle(id)?;
        let session = handle.lock().await;
        Ok(session.clone())
    }

    /// Appends the user's message, waits out the configured delay, then
    /// appends the reply. Returns both new messages.
    ///
    /// The reply runs on its own task so the typing flag is always released,
    /// even if the caller is dropped mid-delay. A clear during the delay
    /// discards the pending reply and the send fails with a conflict.
    pub async fn send(&self, id: &str, content: &str) -> Result<Vec<ChatMessage>> {
        let handle = self.handle(id)?;

        let (user, generation) = {
            let mut session = handle.lock().await;
            if session.is_typing() {
                return Err(FolioError::Conflict(
                    "The assistant is still answering the previous message".to_string(),
                ));
            }
            session.set_typing(true);
            (session.push_user(content).clone(), session.generation())
        };

        let task = {
            let handle = handle.clone();
            let portfolio = self.portfolio.clone();
            let delay = self.response_delay;
            let content = content.to_string();
            tokio::spawn(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                let mut session = handle.lock().await;
                if session.generation() != generation {
                    return None;
                }
                let reply = session.push_reply(&content, &portfolio).clone();
                session.set_typing(false);
                Some(reply)
            })
        };

        match task.await {
            Ok(Some(reply)) => {
                tracing::debug!(
                    session_id = %id,
                    reply_type = %reply.message_type,
                    "Chat reply appended"
                );
                Ok(vec![user, reply])
            }
            Ok(None) => {
                tracing::debug!(session_id = %id, "Chat reply discarded after clear");
                Err(FolioError::Conflict(
                    "The conversation was cleared before the reply was ready".to_string(),
                ))
            }
            Err(e) => {
                let mut session = handle.lock().await;
                if session.generation() == generation {
                    session.set_typing(false);
                }
                Err(FolioError::Internal(format!("Chat reply task failed: {e}")))
            }
        }
    }

    pub async fn clear(&self, id: &str) -> Result<ChatSession> {
        let handle = self.handle(id)?;
        let mut session = handle.lock().await;
        session.clear();
        Ok(session.clone())
    }

    /// Flips the panel open state and returns the new value.
    pub async fn toggle(&self, id: &str) -> Result<bool> {
        let handle = self.handle(id)?;
        let mut session = handle.lock().await;
        Ok(session.toggle())
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }
}

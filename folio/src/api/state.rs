use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::models::Portfolio;
use crate::services::{AssistantService, ContactService, ContentService};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub portfolio: Arc<Portfolio>,
    pub assistant: AssistantService,
    pub content: ContentService,
    pub contact: ContactService,
    /// Cancelled on shutdown; ends open live feeds.
    pub shutdown: CancellationToken,
}

impl AppState {
    pub async fn new(config: Config, db: Arc<dyn DatabaseBackend>, portfolio: Portfolio) -> Self {
        let config = Arc::new(config);
        let portfolio = Arc::new(portfolio);
        let assistant = AssistantService::new(portfolio.clone(), &config.assistant);
        let content = ContentService::new(portfolio.clone(), &config.content).await;
        let contact = ContactService::new(db.clone());

        Self {
            config,
            db,
            portfolio,
            assistant,
            content,
            contact,
            shutdown: CancellationToken::new(),
        }
    }
}

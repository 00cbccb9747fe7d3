//! Live collection queries.
//!
//! Each watcher subscribes to the backend change feed before taking the
//! initial snapshot, so a write that lands between the two is never missed.
//! Every matching change re-queries the whole collection and yields the
//! fresh list. A failed query yields the error and ends the stream.

use std::sync::Arc;

use async_stream::stream;
use futures::stream::BoxStream;
use tokio::sync::broadcast::error::RecvError;

use crate::db::traits::{Collection, DatabaseBackend};
use crate::error::Result;
use crate::models::{ContactMessage, Project};

/// Streams the full project list, newest first, on every project write.
pub fn watch_projects(db: Arc<dyn DatabaseBackend>) -> BoxStream<'static, Result<Vec<Project>>> {
    Box::pin(stream! {
        let mut changes = db.changes();

        loop {
            match db.list_projects().await {
                Ok(projects) => yield Ok(projects),
                Err(e) => {
                    tracing::warn!(error = %e, "Project watch query failed");
                    yield Err(e);
                    break;
                }
            }

            if !wait_for(&mut changes, Collection::Projects).await {
                break;
            }
        }
    })
}

/// Streams the full contact message list, newest first, on every message write.
pub fn watch_messages(
    db: Arc<dyn DatabaseBackend>,
) -> BoxStream<'static, Result<Vec<ContactMessage>>> {
    Box::pin(stream! {
        let mut changes = db.changes();

        loop {
            match db.list_messages().await {
                Ok(messages) => yield Ok(messages),
                Err(e) => {
                    tracing::warn!(error = %e, "Message watch query failed");
                    yield Err(e);
                    break;
                }
            }

            if !wait_for(&mut changes, Collection::Messages).await {
                break;
            }
        }
    })
}

/// Waits for the next change to `wanted`. Returns false once the feed closes.
async fn wait_for(
    changes: &mut tokio::sync::broadcast::Receiver<Collection>,
    wanted: Collection,
) -> bool {
    loop {
        match changes.recv().await {
            Ok(collection) if collection == wanted => return true,
            Ok(_) => continue,
            Err(RecvError::Lagged(skipped)) => {
                tracing::debug!(%wanted, skipped, "Change feed lagged, re-querying");
                return true;
            }
            Err(RecvError::Closed) => return false,
        }
    }
}

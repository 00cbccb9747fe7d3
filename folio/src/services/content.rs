use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use crate::assistant::templates::generate_content;
use crate::assistant::{FixedPicker, RandomPicker, TemplatePicker};
use crate::config::ContentConfig;
use crate::error::{FolioError, Result};
use crate::models::{ContentType, GeneratedContent, Portfolio};

/// Content generator with a newest-first library persisted to a JSON file.
#[derive(Clone)]
pub struct ContentService {
    library: Arc<Mutex<Vec<GeneratedContent>>>,
    library_path: PathBuf,
    portfolio: Arc<Portfolio>,
    picker: Arc<dyn TemplatePicker>,
    delay: Duration,
}

impl ContentService {
    pub async fn new(portfolio: Arc<Portfolio>, config: &ContentConfig) -> Self {
        let picker: Arc<dyn TemplatePicker> = if config.randomize_templates {
            Arc::new(RandomPicker)
        } else {
            Arc::new(FixedPicker::default())
        };
        Self::with_picker(portfolio, config, picker).await
    }

    pub async fn with_picker(
        portfolio: Arc<Portfolio>,
        config: &ContentConfig,
        picker: Arc<dyn TemplatePicker>,
    ) -> Self {
        let library_path = PathBuf::from(&config.library_path);
        let library = load_library(&library_path).await;
        tracing::debug!(
            path = %library_path.display(),
            items = library.len(),
            "Loaded generated content library"
        );

        Self {
            library: Arc::new(Mutex::new(library)),
            library_path,
            portfolio,
            picker,
            delay: Duration::from_millis(config.generation_delay_ms),
        }
    }

    /// Renders content for `input`, stores it at the front of the library and
    /// returns it. Blank input is rejected before any delay.
    pub async fn generate(
        &self,
        content_type: ContentType,
        input: &str,
    ) -> Result<GeneratedContent> {
        if input.trim().is_empty() {
            return Err(FolioError::Validation("Input cannot be empty".to_string()));
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let text = generate_content(content_type, input, &self.portfolio, self.picker.as_ref());
        let item = GeneratedContent::new(content_type, text);

        let mut library = self.library.lock().await;
        let mut next = Vec::with_capacity(library.len() + 1);
        next.push(item.clone());
        next.extend(library.iter().cloned());
        self.save(&next).await?;
        *library = next;
        tracing::info!(content_type = %content_type, items = library.len(), "Content generated");

        Ok(item)
    }

    pub async fn list(&self) -> Vec<GeneratedContent> {
        self.library.lock().await.clone()
    }

    /// Removes the item at `index` (0 is newest).
    pub async fn delete(&self, index: usize) -> Result<GeneratedContent> {
        let mut library = self.library.lock().await;
        if index >= library.len() {
            return Err(FolioError::NotFound(format!(
                "No generated content at index {index}"
            )));
        }
        let mut next = library.clone();
        let removed = next.remove(index);
        self.save(&next).await?;
        *library = next;
        Ok(removed)
    }

    pub async fn clear(&self) -> Result<()> {
        let mut library = self.library.lock().await;
        self.save(&[]).await?;
        library.clear();
        Ok(())
    }

    /// Writes `library` to disk. Callers swap it into memory only on success.
    async fn save(&self, library: &[GeneratedContent]) -> Result<()> {
        let json = serde_json::to_string(library)?;
        tokio::fs::write(&self.library_path, json).await?;
        Ok(())
    }
}

/// A missing file is an empty library. So is a malformed one.
async fn load_library(path: &Path) -> Vec<GeneratedContent> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not read content library");
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Ignoring malformed content library"
            );
            Vec::new()
        }
    }
}

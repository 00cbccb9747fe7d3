// Common test utilities for integration tests
use std::sync::{Arc, Once};

use folio::config::DatabaseConfig;
use folio::db::{Database, DatabaseBackend, LibSqlBackend};
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// File-backed libSQL store in a fresh temp dir. Keep the `TempDir` alive for
/// the duration of the test.
#[allow(dead_code)]
pub async fn setup_backend() -> (Arc<dyn DatabaseBackend>, TempDir) {
    init_test_logger();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("folio_test.db");
    let config = DatabaseConfig {
        url: format!("file:{}", db_path.to_str().unwrap()),
        auth_token: None,
        local_path: None,
    };

    let db = Database::new(&config)
        .await
        .expect("Failed to open test database");
    (Arc::new(LibSqlBackend::new(db)), temp_dir)
}

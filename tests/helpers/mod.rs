//! Shared test infrastructure

pub mod database;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Settings suitable for tests: fast bcrypt, fixed secret, temp storage
pub fn test_settings(storage_root: &std::path::Path) -> fairhub::Settings {
    let mut settings = fairhub::Settings::default();
    settings.auth.jwt_secret = "integration-test-secret-32-bytes".to_string();
    settings.auth.bcrypt_cost = 4;
    settings.storage.root_dir = storage_root.display().to_string();
    settings
}

/// Test context with a temporary blob store root
pub struct BlobTestContext {
    pub temp_dir: tempfile::TempDir,
    pub store: fairhub::BlobStore,
}

impl BlobTestContext {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        let temp_dir = tempfile::tempdir()?;
        let store = fairhub::BlobStore::new(temp_dir.path());

        Ok(Self { temp_dir, store })
    }
}

/// Test utilities for the file-backed repositories.
///
/// Provides RAII-based cleanup that guarantees test data is removed even
/// if tests panic or fail.
use anyhow::Result;
use std::sync::Arc;
use tempfile::TempDir;

use super::connection::YamlConnection;
use super::notification_log_repository::NotificationLogRepository;
use super::profile_repository::ProfileRepository;

/// Test environment that provides a temporary directory and connection
/// that are cleaned up when the environment is dropped.
pub struct TestEnvironment {
    pub connection: YamlConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory.
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = YamlConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Test helper that provides repository instances for a test environment.
pub struct TestHelper {
    pub env: TestEnvironment,
    pub profile_repo: ProfileRepository,
    pub notification_log_repo: NotificationLogRepository,
}

impl TestHelper {
    /// Create a new test helper with a fresh environment.
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let connection = Arc::new(env.connection.clone());
        let profile_repo = ProfileRepository::new(connection.clone());
        let notification_log_repo = NotificationLogRepository::new(connection);

        Ok(Self {
            env,
            profile_repo,
            notification_log_repo,
        })
    }
}

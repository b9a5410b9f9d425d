//! Persistence for the authorization callback result.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StorageError;
use crate::response::AuthorizationResult;

/// File the callback route persists to, relative to the working directory.
pub const AUTH_DATA_FILE: &str = "auth_data.json";

/// Store for the single authorization-result file.
///
/// Writes go to a temporary sibling first and are renamed over the target, so
/// a reader never observes a torn file. The mutex serializes writers within
/// this process; a later write fully replaces an earlier one.
pub struct AuthDataStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AuthDataStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Target path of the persisted file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `result` and replace the file contents with it.
    pub async fn save(&self, result: &AuthorizationResult) -> Result<(), StorageError> {
        let json = serde_json::to_string(result)?;

        let _guard = self.write_lock.lock().await;

        // Write to temporary file first
        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json.as_bytes())
            .await
            .map_err(|source| StorageError::Write {
                path: temp_path.display().to_string(),
                source,
            })?;

        // Atomically rename temporary file over the actual file
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|source| StorageError::Replace {
                path: self.path.display().to_string(),
                source,
            })?;

        debug!("Authorization data saved to {:?}", self.path);
        Ok(())
    }
}

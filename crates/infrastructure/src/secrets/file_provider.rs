//! File-backed secret provider.
//!
//! Secrets live in a JSON object keyed by secret path:
//! ```json
//! {
//!   "company/application/db/user": "admin",
//!   "company/application/db/pass": "hunter2"
//! }
//! ```
//! The file should be kept out of version control.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use secretenv_application::ports::{
    FileSystem, FileSystemError, SecretProvider, SecretProviderError,
};
use tracing::{debug, warn};

use crate::serialization::from_json_bytes;

/// Converts `FileSystemError` to `std::io::Error` for `SecretProviderError`.
fn to_io_error(e: FileSystemError) -> std::io::Error {
    match e {
        FileSystemError::Io(io_err) => io_err,
        FileSystemError::NotFound(path) => {
            std::io::Error::new(std::io::ErrorKind::NotFound, path.display().to_string())
        }
        FileSystemError::PermissionDenied(path) => std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            path.display().to_string(),
        ),
    }
}

/// Secret provider reading a JSON secrets file.
#[derive(Debug, Clone)]
pub struct FileSecretProvider<F> {
    fs: F,
    path: PathBuf,
}

impl<F: FileSystem> FileSecretProvider<F> {
    /// Creates a provider for the secrets file at `path`.
    pub fn new(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    /// Returns the secrets file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every secret in the file. A missing file holds no secrets.
    async fn load(&self) -> Result<BTreeMap<String, String>, SecretProviderError> {
        if !self.fs.exists(&self.path).await {
            warn!(path = %self.path.display(), "secrets file not found");
            return Ok(BTreeMap::new());
        }

        let content = self.fs.read_file(&self.path).await.map_err(to_io_error)?;
        let secrets: BTreeMap<String, String> = from_json_bytes(&content)
            .map_err(|e| SecretProviderError::Serialization(e.to_string()))?;

        debug!(path = %self.path.display(), count = secrets.len(), "loaded secrets file");
        Ok(secrets)
    }
}

#[async_trait]
impl<F: FileSystem> SecretProvider for FileSecretProvider<F> {
    async fn fetch(
        &self,
        paths: &[String],
    ) -> Result<HashMap<String, String>, SecretProviderError> {
        let mut secrets = self.load().await?;

        paths
            .iter()
            .map(|path| {
                secrets
                    .remove(path)
                    .map(|value| (path.clone(), value))
                    .ok_or_else(|| SecretProviderError::NotFound(path.clone()))
            })
            .collect()
    }
}

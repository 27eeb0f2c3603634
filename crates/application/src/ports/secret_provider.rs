//! Secret provider port
//!
//! Defines the interface for fetching secret values by path.

use std::collections::HashMap;

use async_trait::async_trait;

/// Errors that can occur while fetching secrets.
#[derive(Debug, thiserror::Error)]
pub enum SecretProviderError {
    /// No secret exists at the requested path.
    #[error("secret not found: {0}")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Fetches secret values from an external store.
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Fetches the value of every requested path.
    ///
    /// # Arguments
    /// * `paths` - Distinct secret paths to fetch
    ///
    /// # Returns
    /// A map from each requested path to its value.
    ///
    /// # Errors
    /// Returns `SecretProviderError::NotFound` if any path has no value.
    async fn fetch(
        &self,
        paths: &[String],
    ) -> Result<HashMap<String, String>, SecretProviderError>;

    /// Fetches a single secret value.
    ///
    /// # Arguments
    /// * `path` - Secret path
    async fn fetch_one(&self, path: &str) -> Result<String, SecretProviderError> {
        let mut values = self.fetch(&[path.to_string()]).await?;
        values
            .remove(path)
            .ok_or_else(|| SecretProviderError::NotFound(path.to_string()))
    }
}

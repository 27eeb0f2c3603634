//! In-memory secret provider.

use std::collections::HashMap;

use async_trait::async_trait;
use secretenv_application::ports::{SecretProvider, SecretProviderError};

/// Secret provider backed by a fixed map of path to value.
#[derive(Debug, Clone, Default)]
pub struct StaticSecretProvider {
    secrets: HashMap<String, String>,
}

impl StaticSecretProvider {
    /// Creates an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a secret.
    #[must_use]
    pub fn with_secret(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(path.into(), value.into());
        self
    }

    /// Returns the number of stored secrets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    /// Returns true if no secrets are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticSecretProvider {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            secrets: iter
                .into_iter()
                .map(|(path, value)| (path.into(), value.into()))
                .collect(),
        }
    }
}

#[async_trait]
impl SecretProvider for StaticSecretProvider {
    async fn fetch(
        &self,
        paths: &[String],
    ) -> Result<HashMap<String, String>, SecretProviderError> {
        paths
            .iter()
            .map(|path| {
                self.secrets
                    .get(path)
                    .map(|value| (path.clone(), value.clone()))
                    .ok_or_else(|| SecretProviderError::NotFound(path.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_fetch() {
        let provider = StaticSecretProvider::new()
            .with_secret("a", "1")
            .with_secret("b", "2");
        assert_eq!(provider.len(), 2);

        let values = provider.fetch(&["a".to_string()]).await.unwrap();
        assert_eq!(values, HashMap::from([("a".to_string(), "1".to_string())]));
    }

    #[tokio::test]
    async fn test_missing_path() {
        let provider: StaticSecretProvider = [("a", "1")].into_iter().collect();
        let result = provider.fetch(&["a".to_string(), "z".to_string()]).await;
        assert!(matches!(result, Err(SecretProviderError::NotFound(ref p)) if p == "z"));
    }

    #[tokio::test]
    async fn test_empty_provider() {
        let provider = StaticSecretProvider::new();
        assert!(provider.is_empty());
        assert!(provider.fetch(&[]).await.unwrap().is_empty());
    }
}

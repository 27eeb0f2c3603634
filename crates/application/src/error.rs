//! Application error types

use secretenv_domain::EnvError;
use thiserror::Error;

use crate::ports::{FileSystemError, SecretProviderError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The source document or its templates are invalid.
    #[error(transparent)]
    Env(#[from] EnvError),

    /// The source document could not be read.
    #[error("failed to read source: {0}")]
    Source(#[from] FileSystemError),

    /// Secrets could not be fetched.
    #[error("failed to fetch secrets: {0}")]
    Secrets(#[from] SecretProviderError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

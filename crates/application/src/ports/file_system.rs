//! File system port
//!
//! Abstracts reading source documents so use cases stay free of real I/O.

use std::future::Future;
use std::path::{Path, PathBuf};

/// Errors that can occur during file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// The file does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file cannot be read by the current user.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read access to files.
pub trait FileSystem: Send + Sync {
    /// Reads the whole file as bytes.
    ///
    /// # Errors
    /// Returns `FileSystemError::NotFound` if the file doesn't exist.
    fn read_file(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<Vec<u8>, FileSystemError>> + Send;

    /// Reads the whole file as UTF-8 text.
    ///
    /// # Errors
    /// Returns `FileSystemError::NotFound` if the file doesn't exist.
    fn read_file_string(
        &self,
        path: &Path,
    ) -> impl Future<Output = Result<String, FileSystemError>> + Send;

    /// Returns true if something exists at `path`.
    fn exists(&self, path: &Path) -> impl Future<Output = bool> + Send;
}

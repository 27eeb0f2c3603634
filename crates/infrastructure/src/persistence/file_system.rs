//! Real file system implementation.

use std::io::ErrorKind;
use std::path::Path;

use secretenv_application::ports::{FileSystem, FileSystemError};
use tokio::fs;

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> FileSystemError {
    match e.kind() {
        ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(path.to_path_buf()),
        _ => FileSystemError::Io(e),
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        fs::read(path).await.map_err(|e| map_io_error(path, e))
    }

    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path)
            .await
            .map_err(|e| map_io_error(path, e))
    }

    async fn exists(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_file_string() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secretenv.env");
        std::fs::write(&path, "A=1\n").unwrap();

        let fs = TokioFileSystem::new();
        assert!(fs.exists(&path).await);
        assert_eq!(fs.read_file_string(&path).await.unwrap(), "A=1\n");
        assert_eq!(fs.read_file(&path).await.unwrap(), b"A=1\n".to_vec());
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.env");

        let fs = TokioFileSystem::new();
        assert!(!fs.exists(&path).await);
        assert!(matches!(
            fs.read_file_string(&path).await,
            Err(FileSystemError::NotFound(p)) if p == path
        ));
        assert!(matches!(
            fs.read_file(&path).await,
            Err(FileSystemError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.env");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let fs = TokioFileSystem::new();
        assert!(matches!(
            fs.read_file_string(&path).await,
            Err(FileSystemError::Io(_))
        ));
    }
}

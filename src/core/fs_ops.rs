// src/core/fs_ops.rs
//! File access for served static assets

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

/// Why a static file could not be served
#[derive(Error, Debug)]
pub enum FileFetchError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read file {}: {}", .0.display(), .1)]
    Unreadable(PathBuf, #[source] io::Error),
}

pub struct FsOps;

impl FsOps {
    /// Read a whole file, telling a missing file apart from a failed read
    pub async fn read_bytes(path: &Path) -> Result<Vec<u8>, FileFetchError> {
        match fs::metadata(path).await {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("File not found: {}", path.display());
                return Err(FileFetchError::NotFound(path.to_path_buf()));
            }
            _ => {}
        }

        match fs::read(path).await {
            Ok(data) => {
                debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(data)
            }
            Err(e) => Err(FileFetchError::Unreadable(path.to_path_buf(), e)),
        }
    }

    /// Resolve `relative` against `base` unless it is already absolute
    pub fn normalize_path(base: &Path, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            base.join(relative)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("portfolio-api-fs-{}-{}", std::process::id(), name))
    }

    #[tokio::test]
    async fn test_read_bytes_missing_file() {
        let path = scratch_path("missing.pdf");
        let err = FsOps::read_bytes(&path).await.unwrap_err();
        assert!(matches!(err, FileFetchError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_read_bytes_returns_content() {
        let path = scratch_path("present.pdf");
        fs::write(&path, b"%PDF-1.4 test").await.unwrap();

        let data = FsOps::read_bytes(&path).await.unwrap();
        assert_eq!(data, b"%PDF-1.4 test");

        fs::remove_file(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_read_bytes_directory_is_unreadable() {
        let path = scratch_path("dir");
        fs::create_dir_all(&path).await.unwrap();

        let err = FsOps::read_bytes(&path).await.unwrap_err();
        assert!(matches!(err, FileFetchError::Unreadable(_, _)));

        fs::remove_dir_all(&path).await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_error_messages_and_source() {
        use std::error::Error as _;

        let missing = FileFetchError::NotFound(PathBuf::from("/srv/cv.pdf"));
        assert_eq!(missing.to_string(), "File not found: /srv/cv.pdf");
        assert!(missing.source().is_none());

        let path = scratch_path("unreadable-dir");
        fs::create_dir_all(&path).await.unwrap();
        let err = FsOps::read_bytes(&path).await.unwrap_err();
        assert!(err
            .to_string()
            .starts_with(&format!("Failed to read file {}: ", path.display())));
        assert!(err.source().is_some());
        fs::remove_dir_all(&path).await.unwrap();
    }

    #[test]
    fn test_normalize_path() {
        let base = Path::new("/srv/portfolio");
        assert_eq!(
            FsOps::normalize_path(base, Path::new("social/cv.pdf")),
            PathBuf::from("/srv/portfolio/social/cv.pdf")
        );
        assert_eq!(
            FsOps::normalize_path(base, Path::new("/opt/cv.pdf")),
            PathBuf::from("/opt/cv.pdf")
        );
    }
}

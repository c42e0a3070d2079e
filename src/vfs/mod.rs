//! Virtual filesystem abstraction
//!
//! Narrow interface the request handler resolves files through: open an entry
//! by rooted path, stat the open handle, read its content. Backends decide
//! where the bytes live (OS directory, in-memory tree) and carry their own
//! traversal protection, so a hostile path can never reach outside the
//! configured root even if a caller skips its own cleaning.

mod disk;
mod memory;
pub mod path;

pub use disk::DiskFs;
pub use memory::MemoryFs;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Filesystem access error.
///
/// `NotFound` and `PermissionDenied` form the recoverable class: requests
/// hitting them may still be answered with the fallback document. Anything
/// else is an infrastructure failure and must surface as a server error.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("file not found")]
    NotFound,
    #[error("permission denied")]
    PermissionDenied,
    #[error("i/o error: {0}")]
    Io(std::io::Error),
}

impl FsError {
    /// Whether serving the fallback document is an acceptable answer to this
    /// error. Folding `PermissionDenied` in with `NotFound` avoids leaking
    /// the existence of unreadable entries.
    #[must_use]
    pub const fn is_fallback_eligible(&self) -> bool {
        matches!(self, Self::NotFound | Self::PermissionDenied)
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Io(err),
        }
    }
}

/// Metadata of an open filesystem entry.
#[derive(Debug, Clone)]
pub struct FileMeta {
    /// Base name of the entry, used for content-type detection.
    pub name: String,
    /// Content length in bytes.
    pub len: u64,
    /// Last modification time, when the backend tracks one.
    pub modified: Option<DateTime<Utc>>,
    /// True for regular files; directories, sockets and the like are false.
    pub is_regular: bool,
}

/// Read-only hierarchical store opened by rooted path.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Open the entry at `path` (interpreted as rooted at the store's root).
    async fn open(&self, path: &str) -> Result<Box<dyn FileHandle>, FsError>;
}

/// An open entry. Dropping the handle releases the underlying resource.
#[async_trait]
pub trait FileHandle: Send {
    /// Fetch the entry's metadata.
    async fn stat(&self) -> Result<FileMeta, FsError>;

    /// Read the entire content.
    async fn read_all(&mut self) -> Result<Vec<u8>, FsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_classification() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(matches!(FsError::from(not_found), FsError::NotFound));

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        assert!(matches!(FsError::from(denied), FsError::PermissionDenied));

        let other = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe");
        assert!(matches!(FsError::from(other), FsError::Io(_)));
    }

    #[test]
    fn test_fallback_eligibility() {
        assert!(FsError::NotFound.is_fallback_eligible());
        assert!(FsError::PermissionDenied.is_fallback_eligible());

        let io = FsError::Io(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe"));
        assert!(!io.is_fallback_eligible());
    }
}

//! OS directory backend
//!
//! Serves entries from a directory on disk. Every lookup path is lexically
//! cleaned before being joined under the root, so `..` segments resolve
//! inside the root or not at all.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncReadExt;

use super::{path, FileHandle, FileMeta, FileSystem, FsError};

/// Filesystem rooted at an OS directory.
#[derive(Debug, Clone)]
pub struct DiskFs {
    root: PathBuf,
}

impl DiskFs {
    /// Create a store rooted at `root`. The directory does not have to exist
    /// yet; lookups will report `NotFound` until it does.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl FileSystem for DiskFs {
    async fn open(&self, raw: &str) -> Result<Box<dyn FileHandle>, FsError> {
        let rooted = path::clean(raw);
        let relative = rooted.trim_start_matches('/');

        let full = if relative.is_empty() {
            self.root.clone()
        } else {
            self.root.join(relative)
        };

        let name = Path::new(&rooted)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let file = fs::File::open(&full).await?;
        Ok(Box::new(DiskFile { file, name }))
    }
}

struct DiskFile {
    file: fs::File,
    name: String,
}

#[async_trait]
impl FileHandle for DiskFile {
    async fn stat(&self) -> Result<FileMeta, FsError> {
        let metadata = self.file.metadata().await?;
        let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

        Ok(FileMeta {
            name: self.name.clone(),
            len: metadata.len(),
            modified,
            is_regular: metadata.is_file(),
        })
    }

    async fn read_all(&mut self) -> Result<Vec<u8>, FsError> {
        let mut content = Vec::new();
        self.file.read_to_end(&mut content).await?;
        Ok(content)
    }
}

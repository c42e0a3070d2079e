//! In-memory backend
//!
//! A virtual file tree useful for tests and embedded asset sets. Inserting a
//! file materializes its ancestor directories as non-regular entries, so the
//! tree behaves like a real one when a directory path is opened.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::Path;

use super::{path, FileHandle, FileMeta, FileSystem, FsError};

#[derive(Debug, Clone)]
enum Entry {
    File {
        content: Vec<u8>,
        modified: DateTime<Utc>,
    },
    Dir,
    Denied,
}

/// Filesystem backed by a map of rooted paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    entries: HashMap<String, Entry>,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a regular file, creating the ancestor directories.
    pub fn insert(&mut self, raw: &str, content: impl Into<Vec<u8>>) {
        let rooted = path::clean(raw);
        self.insert_ancestors(&rooted);
        self.entries.insert(
            rooted,
            Entry::File {
                content: content.into(),
                modified: Utc::now(),
            },
        );
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_file(mut self, raw: &str, content: impl Into<Vec<u8>>) -> Self {
        self.insert(raw, content);
        self
    }

    /// Mark a path as unreadable: opening it reports `PermissionDenied`.
    pub fn deny(&mut self, raw: &str) {
        let rooted = path::clean(raw);
        self.insert_ancestors(&rooted);
        self.entries.insert(rooted, Entry::Denied);
    }

    fn insert_ancestors(&mut self, rooted: &str) {
        let mut ancestor = Path::new(rooted);
        while let Some(parent) = ancestor.parent() {
            let key = parent.to_string_lossy().into_owned();
            self.entries.entry(key).or_insert(Entry::Dir);
            ancestor = parent;
        }
    }
}

#[async_trait]
impl FileSystem for MemoryFs {
    async fn open(&self, raw: &str) -> Result<Box<dyn FileHandle>, FsError> {
        let rooted = path::clean(raw);

        let entry = match self.entries.get(&rooted) {
            Some(Entry::Denied) => return Err(FsError::PermissionDenied),
            Some(entry) => entry.clone(),
            None => return Err(FsError::NotFound),
        };

        let name = Path::new(&rooted)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Box::new(MemoryFile { name, entry }))
    }
}

struct MemoryFile {
    name: String,
    entry: Entry,
}

#[async_trait]
impl FileHandle for MemoryFile {
    async fn stat(&self) -> Result<FileMeta, FsError> {
        match &self.entry {
            Entry::File { content, modified } => Ok(FileMeta {
                name: self.name.clone(),
                len: content.len() as u64,
                modified: Some(*modified),
                is_regular: true,
            }),
            Entry::Dir => Ok(FileMeta {
                name: self.name.clone(),
                len: 0,
                modified: None,
                is_regular: false,
            }),
            Entry::Denied => Err(FsError::PermissionDenied),
        }
    }

    async fn read_all(&mut self) -> Result<Vec<u8>, FsError> {
        match &self.entry {
            Entry::File { content, .. } => Ok(content.clone()),
            _ => Err(FsError::Io(std::io::Error::other("not a regular file"))),
        }
    }
}

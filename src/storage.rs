//! File storage backing the `/files/` routes.
//!
//! Every name is resolved against a single root directory. Names that would
//! escape the root are refused before touching the filesystem.

use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("invalid file name: {0:?}")]
    InvalidName(String),
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        source: std::io::Error,
    },
    #[error("failed to write {name}: {source}")]
    Write {
        name: String,
        source: std::io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn read(&self, name: &str) -> Result<Vec<u8>, FileStoreError> {
        let path = self.resolve(name)?;

        tokio::fs::read(&path).await.map_err(|source| match source.kind() {
            ErrorKind::NotFound => FileStoreError::NotFound(name.to_string()),
            _ => FileStoreError::Read {
                name: name.to_string(),
                source,
            },
        })
    }

    pub async fn write(&self, name: &str, contents: &[u8]) -> Result<(), FileStoreError> {
        let path = self.resolve(name)?;

        tokio::fs::write(&path, contents)
            .await
            .map_err(|source| FileStoreError::Write {
                name: name.to_string(),
                source,
            })
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, FileStoreError> {
        let invalid = || FileStoreError::InvalidName(name.to_string());

        if name.is_empty() || name.contains('\\') || name.contains('\0') {
            return Err(invalid());
        }

        let relative = Path::new(name);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
        {
            return Err(invalid());
        }

        Ok(self.root.join(relative))
    }
}

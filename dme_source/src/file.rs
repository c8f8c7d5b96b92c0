use async_trait::async_trait;
use dme_core::NoteSource;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{Result, SourceError};

/// Reads a note from a text file on disk.
#[derive(Debug, Clone)]
pub struct FileNoteSource {
    path: PathBuf,
}

impl FileNoteSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file. A file holding only whitespace is rejected
    /// rather than extracted as an empty note.
    pub async fn read_note(&self) -> Result<String> {
        info!("Reading note file: {}", self.path.display());

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => SourceError::NotFound(self.path.clone()),
                _ => SourceError::Io {
                    path: self.path.clone(),
                    source,
                },
            })?;

        if content.trim().is_empty() {
            return Err(SourceError::Empty(self.path.clone()));
        }

        Ok(content)
    }
}

#[async_trait]
impl NoteSource for FileNoteSource {
    async fn read(&self) -> anyhow::Result<String> {
        Ok(self.read_note().await?)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SourceError>;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Note file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read note file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Note file is empty: {}", .0.display())]
    Empty(PathBuf),
}

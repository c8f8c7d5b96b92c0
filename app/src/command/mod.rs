//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input type, so
//! dispatch is resolved at compile time.

use dme_config::{Config, NoteConfig};
use dme_core::NoteSource;
use dme_source::{FileNoteSource, LiteralNoteSource};
use std::path::{Path, PathBuf};
use std::sync::Arc;

mod extract;
mod info;
mod init;
mod send;
mod version;

pub use extract::{ExtractInput, ExtractStrategy};
pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use send::{SendInput, SendStrategy};
pub use version::VersionStrategy;

/// Contract for all command strategies.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Where the note comes from, as chosen on the command line.
#[derive(Debug, Clone, Default)]
pub struct NoteSelection {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

impl NoteSelection {
    /// Inline text wins over a path; with neither, the configured note
    /// file is read.
    pub fn into_source(self, config: &NoteConfig) -> Arc<dyn NoteSource> {
        match (self.text, self.path) {
            (Some(text), _) => Arc::new(LiteralNoteSource::new(text)),
            (None, Some(path)) => Arc::new(FileNoteSource::new(path)),
            (None, None) => Arc::new(FileNoteSource::new(config.path.clone())),
        }
    }
}

/// Explicit `--config` file, or `~/dme/config.json` with defaults when
/// absent.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    path.map_or_else(Config::load, Config::load_from)
}

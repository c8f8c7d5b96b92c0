use async_trait::async_trait;
use dme_core::NoteSource;

/// Note text given directly, e.g. on the command line.
#[derive(Debug, Clone)]
pub struct LiteralNoteSource {
    text: String,
}

impl LiteralNoteSource {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl NoteSource for LiteralNoteSource {
    async fn read(&self) -> anyhow::Result<String> {
        Ok(self.text.clone())
    }

    fn describe(&self) -> String {
        "literal text".to_string()
    }
}

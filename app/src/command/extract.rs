use dme_config::Config;
use dme_core::{extract, read_or_fallback, to_value};

use super::NoteSelection;

/// Input parameters for the Extract command strategy.
#[derive(Debug, Clone)]
pub struct ExtractInput {
    pub config: Config,
    pub note: NoteSelection,
    pub pretty: bool,
}

/// Strategy for extracting an order and printing its JSON, with no
/// network access.
#[derive(Debug, Clone, Copy)]
pub struct ExtractStrategy;

impl super::CommandStrategy for ExtractStrategy {
    type Input = ExtractInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let source = input.note.into_source(&input.config.note);
        let (note, _) = read_or_fallback(source.as_ref(), &input.config.note.fallback_text).await;

        let value = to_value(&extract(&note))?;
        if input.pretty {
            println!("{}", serde_json::to_string_pretty(&value)?);
        } else {
            println!("{value}");
        }
        Ok(())
    }
}

use dme_config::Config;
use dme_core::{NoteSource, OrderPipeline};
use dme_transmit::HttpTransmitter;
use std::time::Duration;
use tracing::info;

use super::NoteSelection;

/// Input parameters for the Send command strategy.
#[derive(Debug, Clone)]
pub struct SendInput {
    pub config: Config,
    pub note: NoteSelection,
    /// Optional endpoint override
    pub endpoint: Option<String>,
}

/// Strategy for the full pipeline: read the note, extract the order and
/// post it to the intake endpoint.
///
/// A non-2xx status is reported, not raised; the process still exits 0.
#[derive(Debug, Clone, Copy)]
pub struct SendStrategy;

impl super::CommandStrategy for SendStrategy {
    type Input = SendInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let mut config = input.config;
        if let Some(endpoint) = input.endpoint {
            config.endpoint.url = endpoint;
        }
        config.validate()?;

        let transmitter = HttpTransmitter::new(
            &config.endpoint.url,
            Duration::from_secs(config.endpoint.timeout_secs),
        )?;
        let source = input.note.into_source(&config.note);
        info!("Processing note from {}", source.describe());

        let pipeline =
            OrderPipeline::new(source, transmitter).with_fallback_note(config.note.fallback_text);
        let outcome = pipeline.run().await?;

        println!("{}", outcome.body);
        println!("Status: {}", outcome.status);
        Ok(())
    }
}

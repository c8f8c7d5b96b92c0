//! Note → record → JSON → endpoint.

use tracing::{info, warn};

use crate::extraction::Extractor;
use crate::record::DmeRecord;
use crate::{DEFAULT_FALLBACK_NOTE, NoteSource, Transmitter, serialize};

/// Result of running one note through the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub record: DmeRecord,
    /// Exact body that was posted.
    pub body: String,
    pub status: u16,
    /// The source failed and the fallback note was extracted instead.
    pub used_fallback: bool,
}

impl PipelineOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Read the note, substituting `fallback` when the source fails.
///
/// The flag is `true` when the fallback was used.
pub async fn read_or_fallback<S>(source: &S, fallback: &str) -> (String, bool)
where
    S: NoteSource + ?Sized,
{
    match source.read().await {
        Ok(note) => (note, false),
        Err(e) => {
            warn!(
                "Could not read note from {}: {e:#}. Using fallback note",
                source.describe()
            );
            (fallback.to_string(), true)
        }
    }
}

pub struct OrderPipeline<S, T>
where
    S: NoteSource,
    T: Transmitter,
{
    source: S,
    transmitter: T,
    extractor: Extractor,
    fallback_note: String,
}

impl<S, T> OrderPipeline<S, T>
where
    S: NoteSource,
    T: Transmitter,
{
    pub fn new(source: S, transmitter: T) -> Self {
        Self {
            source,
            transmitter,
            extractor: Extractor::new(),
            fallback_note: DEFAULT_FALLBACK_NOTE.to_string(),
        }
    }

    /// Note used when the source cannot be read.
    #[must_use]
    pub fn with_fallback_note(mut self, fallback_note: impl Into<String>) -> Self {
        self.fallback_note = fallback_note.into();
        self
    }

    pub async fn run(&self) -> anyhow::Result<PipelineOutcome> {
        let (note, used_fallback) = read_or_fallback(&self.source, &self.fallback_note).await;
        let record = self.extractor.extract(&note);
        let body = serialize::to_json(&record)?;

        info!(
            "Sending {} order ({} bytes)",
            record.device(),
            body.len()
        );
        let status = self.transmitter.send(&body).await;

        let outcome = PipelineOutcome {
            record,
            body,
            status,
            used_fallback,
        };

        if outcome.is_success() {
            info!("Intake endpoint accepted order: status {status}");
        } else {
            warn!("Intake endpoint returned status {status}");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DeviceType;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct StaticNote(Option<&'static str>);

    #[async_trait]
    impl NoteSource for StaticNote {
        async fn read(&self) -> anyhow::Result<String> {
            self.0
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("note unavailable"))
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    #[derive(Default)]
    struct RecordingTransmitter {
        status: u16,
        bodies: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Transmitter for RecordingTransmitter {
        async fn send(&self, json: &str) -> u16 {
            if let Ok(mut bodies) = self.bodies.lock() {
                bodies.push(json.to_string());
            }
            self.status
        }
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn posts_serialized_record() {
        let transmitter = std::sync::Arc::new(RecordingTransmitter {
            status: 200,
            ..Default::default()
        });
        let pipeline = OrderPipeline::new(
            StaticNote(Some("Wheelchair for home use. Ordered by Dr. Patel.")),
            transmitter.clone(),
        );

        let outcome = pipeline.run().await.expect("pipeline should run");

        assert!(outcome.is_success());
        assert!(!outcome.used_fallback);
        assert_eq!(outcome.record.device(), DeviceType::Wheelchair);
        let bodies = transmitter.bodies.lock().expect("lock");
        assert_eq!(
            bodies.as_slice(),
            [r#"{"device":"Wheelchair","ordering_provider":"Dr. Patel"}"#]
        );
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn unreadable_source_uses_fallback() {
        let pipeline = OrderPipeline::new(StaticNote(None), RecordingTransmitter::default())
            .with_fallback_note("Oxygen 3L during sleep. Dr. Ito.");

        let outcome = pipeline.run().await.expect("pipeline should run");

        assert!(outcome.used_fallback);
        assert_eq!(outcome.record.device(), DeviceType::OxygenTank);
        assert_eq!(outcome.record.oxygen_tank_capacity_liters(), Some(3.0));
        assert_eq!(outcome.record.ordering_provider(), "Dr. Ito");
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn default_fallback_is_sample_cpap_note() {
        let pipeline = OrderPipeline::new(StaticNote(None), RecordingTransmitter::default());

        let outcome = pipeline.run().await.expect("pipeline should run");

        assert_eq!(outcome.record.device(), DeviceType::Cpap);
        assert_eq!(outcome.record.ordering_provider(), "Dr. Cameron");
    }

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn non_success_status_is_reported_not_raised() {
        let transmitter = RecordingTransmitter {
            status: 500,
            ..Default::default()
        };
        let pipeline = OrderPipeline::new(StaticNote(Some("cane")), transmitter);

        let outcome = pipeline.run().await.expect("pipeline should run");

        assert_eq!(outcome.status, 500);
        assert!(!outcome.is_success());
    }
}

#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;

pub mod extraction;
pub mod pipeline;
pub mod record;
pub mod serialize;

pub use extraction::{Extractor, extract};
pub use pipeline::{OrderPipeline, PipelineOutcome, read_or_fallback};
pub use record::{AddOn, DeviceType, DmeRecord, MaskType, UsageContext};
pub use serialize::{
    BasicOrder, CpapOrder, OrderPayload, OxygenTankOrder, serialize, to_json, to_value,
};

/// Sample note substituted when the configured note cannot be read.
pub const DEFAULT_FALLBACK_NOTE: &str =
    "Patient needs a CPAP with full face mask and humidifier. AHI > 20. Ordered by Dr. Cameron.";

/// Intake endpoint that receives extracted orders unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://alert-api.com/DrExtract";

/// Supplies the text of a single physician note.
#[async_trait]
pub trait NoteSource: Send + Sync {
    async fn read(&self) -> anyhow::Result<String>;

    /// Short human-readable origin (a path, "literal", ...) used in logs.
    fn describe(&self) -> String;
}

/// Delivers a serialized order and reports the HTTP status code.
///
/// Implementations never fail: transport errors are folded into a
/// 5xx status so callers only ever observe a number.
#[async_trait]
pub trait Transmitter: Send + Sync {
    async fn send(&self, json: &str) -> u16;
}

#[async_trait]
impl<T: NoteSource + ?Sized> NoteSource for std::sync::Arc<T> {
    async fn read(&self) -> anyhow::Result<String> {
        (**self).read().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

#[async_trait]
impl<T: Transmitter + ?Sized> Transmitter for std::sync::Arc<T> {
    async fn send(&self, json: &str) -> u16 {
        (**self).send(json).await
    }
}

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

//! Note sources: where the text of a physician note comes from.

mod error;
mod file;
mod literal;

pub use error::{Result, SourceError};
pub use file::FileNoteSource;
pub use literal::LiteralNoteSource;

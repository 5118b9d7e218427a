//! Runtime: fans a request's questions across bounded workers.
//!
//! The coordinator enforces the question cap, the context budget and the
//! per-question timeout, and always returns one answer per retained question
//! in input order. The pipeline adds document text extraction in front.

pub mod coordinator;
pub mod pipeline;
pub mod types;

pub use coordinator::BatchCoordinator;
pub use pipeline::{answer_document, Pipeline};
pub use types::*;

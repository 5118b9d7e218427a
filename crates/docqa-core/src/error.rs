//! Error types for DocQA.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionFailure),

    #[error("Answer error: {0}")]
    Answer(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why a document yielded no usable text.
///
/// Returned as a value by the text extractor; parser-internal errors are
/// flattened into `Unparseable` so they never leak past the ingest crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionFailure {
    #[error("document could not be parsed: {0}")]
    Unparseable(String),

    #[error("no text recoverable from {pages} page(s)")]
    NoText { pages: usize },
}

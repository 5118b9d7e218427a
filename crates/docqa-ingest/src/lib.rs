//! DocQA Ingest: document bytes to text, text to token windows.

pub mod chunking;
pub mod pdf;

pub use chunking::{should_chunk, Chunk, Chunker, Chunks};
pub use pdf::{extract_text, ExtractedText};

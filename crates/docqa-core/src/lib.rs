//! DocQA Core: error taxonomy and configuration shared by every stage.

pub mod config;
pub mod error;

pub use config::DocQaConfig;
pub use error::{Error, ExtractionFailure, Result};

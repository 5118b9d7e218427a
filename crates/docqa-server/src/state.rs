//! Shared application state.

use docqa_core::{DocQaConfig, Error, Result};
use docqa_runtime::Pipeline;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    pub config: DocQaConfig,
    pub pipeline: Pipeline,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: DocQaConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.fetch_timeout)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;
        let pipeline = Pipeline::new(&config);
        Ok(Self {
            config,
            pipeline,
            http,
        })
    }
}

//! Source document download.

use docqa_core::{Error, Result};
use tracing::debug;

/// Download the document at `url` and return its bytes.
pub async fn fetch_document(client: &reqwest::Client, url: &str) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?
        .error_for_status()
        .map_err(|e| Error::Fetch(e.to_string()))?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| Error::Fetch(e.to_string()))?;

    debug!("Fetched {} bytes from {}", bytes.len(), url);
    Ok(bytes.to_vec())
}

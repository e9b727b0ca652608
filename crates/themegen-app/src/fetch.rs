//! Reference stylesheet download.

use std::time::Duration;

use themegen_common::ThemegenError;
use tracing::{info, warn};

const USER_AGENT: &str = concat!("themegen/", env!("CARGO_PKG_VERSION"));

/// Download `url` as text. Any transport or status failure is a
/// [`ThemegenError::Network`].
pub async fn fetch_stylesheet(url: &str, timeout: Duration) -> Result<String, ThemegenError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ThemegenError::Network(format!("failed to build client: {e}")))?;

    let response = client.get(url).send().await.map_err(|e| {
        warn!(url, "stylesheet request failed: {e}");
        ThemegenError::Network(format!("request to {url} failed: {e}"))
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(url, %status, "stylesheet request returned an error status");
        return Err(ThemegenError::Network(format!("{url} returned {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ThemegenError::Network(format!("failed to read {url}: {e}")))?;
    info!(url, bytes = body.len(), "reference stylesheet fetched");
    Ok(body)
}

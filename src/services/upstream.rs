//! Shared upstream HTTP plumbing
//!
//! Each provider client performs single timeout-bound GET calls through
//! the shared `reqwest::Client`; there are no retries at this layer.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from a single upstream call
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(StatusCode),
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// GET a URL and decode the JSON body.
///
/// Non-2xx statuses are errors; timeouts surface as [`FetchError::Http`]
/// and are treated identically to any other failure by callers.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: &str,
) -> Result<T, FetchError> {
    let response = http.get(url).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    Ok(response.json().await?)
}

//! Errors surfaced by data sources.
//!
//! Question generation and session commands do not fail; only fetching can.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

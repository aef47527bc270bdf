//! Upstream failure taxonomy.

use std::time::Duration;

use reqwest::StatusCode;

/// Why a single upstream metric could not be obtained.
///
/// These never escape [`StatsCache::get`](crate::StatsCache::get); they are
/// logged and turned into `"N/A"` for the affected field.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response from {url} has no `{field}`")]
    MissingField { url: String, field: &'static str },

    #[error("no answer within {0:?}")]
    Timeout(Duration),
}

//! The externally visible stats object.

use serde::{Deserialize, Serialize};

use crate::NOT_AVAILABLE;

/// Formatted project metrics, one string per field.
///
/// Every field is always present: either a thousands-separated number or
/// `"N/A"`. Serialized as-is by the `/api/live_stats` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub pypi_downloads: String,
    pub github_downloads: String,
    pub github_stars: String,
    pub github_commits: String,
}

impl StatsSnapshot {
    /// Snapshot with every field set to `"N/A"`.
    pub fn unavailable() -> Self {
        Self {
            pypi_downloads: NOT_AVAILABLE.to_owned(),
            github_downloads: NOT_AVAILABLE.to_owned(),
            github_stars: NOT_AVAILABLE.to_owned(),
            github_commits: NOT_AVAILABLE.to_owned(),
        }
    }
}

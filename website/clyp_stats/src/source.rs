//! The upstream seam.

use async_trait::async_trait;

use crate::release::{total_downloads, Release};
use crate::UpstreamError;

/// Where raw metric values come from.
///
/// Each metric is independent: the cache calls all four concurrently and
/// a failure in one never affects the others. [`releases`](Self::releases)
/// also backs the release page.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Package downloads over the last month.
    async fn pypi_downloads(&self) -> Result<u64, UpstreamError>;

    /// Repository star count.
    async fn github_stars(&self) -> Result<u64, UpstreamError>;

    /// Number of commits on the default branch.
    async fn github_commits(&self) -> Result<u64, UpstreamError>;

    /// Every release of the repository, newest first.
    async fn releases(&self) -> Result<Vec<Release>, UpstreamError>;

    /// Download counts summed over every asset of every release.
    async fn github_release_downloads(&self) -> Result<u64, UpstreamError> {
        Ok(total_downloads(&self.releases().await?))
    }
}

//! Time-bounded snapshot cache over a [`StatsSource`].
//!
//! Readers that find a fresh entry never wait. A stale or missing entry is
//! refreshed by exactly one caller at a time; concurrent callers queue on the
//! refresh lock and re-check freshness once they get it, so a burst of
//! requests after expiry costs one round of upstream calls.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tokio::time::Instant;

use crate::format::metric_field;
use crate::{StatsSnapshot, StatsSource, UpstreamError};

/// How long a snapshot is served before it is refreshed.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Upper bound on each individual upstream call.
pub const DEFAULT_UPSTREAM_TIMEOUT: Duration = Duration::from_secs(5);

struct CacheEntry {
    snapshot: Arc<StatsSnapshot>,
    fetched_at: Instant,
}

/// Caches one [`StatsSnapshot`] for a fixed TTL.
pub struct StatsCache<S> {
    source: S,
    ttl: Duration,
    upstream_timeout: Duration,
    entry: RwLock<Option<CacheEntry>>,
    refresh: tokio::sync::Mutex<()>,
}

impl<S: StatsSource> StatsCache<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            ttl: DEFAULT_TTL,
            upstream_timeout: DEFAULT_UPSTREAM_TIMEOUT,
            entry: RwLock::new(None),
            refresh: tokio::sync::Mutex::new(()),
        }
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Current snapshot, refreshing it first when older than the TTL.
    ///
    /// Never fails: upstream problems show up as `"N/A"` fields. The
    /// snapshot's age is measured from the start of the refresh that
    /// produced it.
    pub async fn get(&self) -> Arc<StatsSnapshot> {
        if let Some(snapshot) = self.fresh(Instant::now()) {
            tracing::debug!("stats cache hit");
            return snapshot;
        }

        let _refreshing = self.refresh.lock().await;
        let started = Instant::now();
        if let Some(snapshot) = self.fresh(started) {
            tracing::debug!("stats refreshed by a concurrent caller");
            return snapshot;
        }

        tracing::debug!("refreshing stats");
        let snapshot = Arc::new(self.fetch_snapshot().await);
        *self.entry.write() = Some(CacheEntry {
            snapshot: Arc::clone(&snapshot),
            fetched_at: started,
        });
        snapshot
    }

    fn fresh(&self, now: Instant) -> Option<Arc<StatsSnapshot>> {
        self.entry
            .read()
            .as_ref()
            .filter(|entry| now.saturating_duration_since(entry.fetched_at) < self.ttl)
            .map(|entry| Arc::clone(&entry.snapshot))
    }

    async fn fetch_snapshot(&self) -> StatsSnapshot {
        let limit = self.upstream_timeout;
        let (pypi, release_downloads, stars, commits) = tokio::join!(
            bounded(limit, self.source.pypi_downloads()),
            bounded(limit, self.source.github_release_downloads()),
            bounded(limit, self.source.github_stars()),
            bounded(limit, self.source.github_commits()),
        );

        StatsSnapshot {
            pypi_downloads: metric_field("pypi_downloads", pypi),
            github_downloads: metric_field("github_downloads", release_downloads),
            github_stars: metric_field("github_stars", stars),
            github_commits: metric_field("github_commits", commits),
        }
    }
}

async fn bounded<F>(limit: Duration, fetch: F) -> Result<u64, UpstreamError>
where
    F: Future<Output = Result<u64, UpstreamError>>,
{
    tokio::time::timeout(limit, fetch)
        .await
        .unwrap_or(Err(UpstreamError::Timeout(limit)))
}

#[cfg(test)]
mod tests;

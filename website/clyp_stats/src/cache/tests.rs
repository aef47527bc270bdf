use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;

use super::*;
use crate::release::Release;
use crate::NOT_AVAILABLE;

/// Counts calls; each metric either answers after `delay` or fails.
struct FakeSource {
    calls: AtomicUsize,
    delay: Duration,
    stars: Option<u64>,
    commits_delay: Option<Duration>,
}

impl FakeSource {
    fn healthy() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
            stars: Some(1_234),
            commits_delay: None,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn answer(&self, value: u64, delay: Duration) -> Result<u64, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(value)
    }
}

#[async_trait]
impl StatsSource for FakeSource {
    async fn pypi_downloads(&self) -> Result<u64, UpstreamError> {
        self.answer(1_234_567, self.delay).await
    }

    async fn github_stars(&self) -> Result<u64, UpstreamError> {
        match self.stars {
            Some(stars) => self.answer(stars, self.delay).await,
            None => {
                self.calls.fetch_add(1, Ordering::SeqCst);
                Err(UpstreamError::Status {
                    url: "https://api.github.com/repos/clyplang/clyp".to_owned(),
                    status: StatusCode::FORBIDDEN,
                })
            }
        }
    }

    async fn github_commits(&self) -> Result<u64, UpstreamError> {
        self.answer(987, self.commits_delay.unwrap_or(self.delay)).await
    }

    async fn releases(&self) -> Result<Vec<Release>, UpstreamError> {
        Ok(Vec::new())
    }

    async fn github_release_downloads(&self) -> Result<u64, UpstreamError> {
        self.answer(0, self.delay).await
    }
}

#[tokio::test(start_paused = true)]
async fn formats_all_metrics() {
    let cache = StatsCache::new(FakeSource::healthy());
    let snapshot = cache.get().await;
    assert_eq!(
        *snapshot,
        StatsSnapshot {
            pypi_downloads: "1,234,567".to_owned(),
            github_downloads: "0".to_owned(),
            github_stars: "1,234".to_owned(),
            github_commits: "987".to_owned(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn serves_cached_snapshot_within_ttl() {
    let cache = StatsCache::new(FakeSource::healthy());
    let first = cache.get().await;
    assert_eq!(cache.source().calls(), 4);

    tokio::time::advance(Duration::from_secs(59)).await;
    let second = cache.get().await;
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(cache.source().calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn refreshes_once_ttl_elapsed() {
    let cache = StatsCache::new(FakeSource::healthy());
    let first = cache.get().await;

    tokio::time::advance(DEFAULT_TTL).await;
    let second = cache.get().await;
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(cache.source().calls(), 8);
}

#[tokio::test(start_paused = true)]
async fn custom_ttl() {
    let cache = StatsCache::new(FakeSource::healthy()).with_ttl(Duration::from_secs(5));
    assert_eq!(cache.ttl(), Duration::from_secs(5));
    cache.get().await;
    tokio::time::advance(Duration::from_secs(5)).await;
    cache.get().await;
    assert_eq!(cache.source().calls(), 8);
}

#[tokio::test(start_paused = true)]
async fn failed_metric_degrades_alone() {
    let source = FakeSource {
        stars: None,
        ..FakeSource::healthy()
    };
    let cache = StatsCache::new(source);
    let snapshot = cache.get().await;
    assert_eq!(snapshot.github_stars, NOT_AVAILABLE);
    assert_eq!(snapshot.pypi_downloads, "1,234,567");
    assert_eq!(snapshot.github_commits, "987");
}

#[tokio::test(start_paused = true)]
async fn degraded_snapshot_is_cached_too() {
    let source = FakeSource {
        stars: None,
        ..FakeSource::healthy()
    };
    let cache = StatsCache::new(source);
    cache.get().await;
    cache.get().await;
    assert_eq!(cache.source().calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn slow_upstream_times_out() {
    let source = FakeSource {
        commits_delay: Some(Duration::from_secs(30)),
        ..FakeSource::healthy()
    };
    let cache = StatsCache::new(source).with_upstream_timeout(Duration::from_secs(5));

    let started = Instant::now();
    let snapshot = cache.get().await;
    assert_eq!(snapshot.github_commits, NOT_AVAILABLE);
    assert_eq!(snapshot.github_stars, "1,234");
    assert!(started.elapsed() < Duration::from_secs(6));
}

#[tokio::test(start_paused = true)]
async fn upstream_calls_run_concurrently() {
    let source = FakeSource {
        delay: Duration::from_secs(2),
        ..FakeSource::healthy()
    };
    let cache = StatsCache::new(source);

    let started = Instant::now();
    cache.get().await;
    // Four sequential calls would take 8s.
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn concurrent_callers_share_one_refresh() {
    let source = FakeSource {
        delay: Duration::from_secs(1),
        ..FakeSource::healthy()
    };
    let cache = Arc::new(StatsCache::new(source));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move { cache.get().await })
        })
        .collect();

    let mut snapshots = Vec::new();
    for handle in handles {
        if let Ok(snapshot) = handle.await {
            snapshots.push(snapshot);
        }
    }

    assert_eq!(snapshots.len(), 8);
    assert_eq!(cache.source().calls(), 4);
    assert!(snapshots.iter().all(|s| Arc::ptr_eq(s, &snapshots[0])));
}

#[tokio::test(start_paused = true)]
async fn snapshot_age_counts_from_refresh_start() {
    let source = FakeSource {
        delay: Duration::from_secs(10),
        ..FakeSource::healthy()
    };
    let cache = StatsCache::new(source).with_upstream_timeout(Duration::from_secs(30));
    cache.get().await;

    // 10s spent fetching + 50s = TTL since the refresh started.
    tokio::time::advance(Duration::from_secs(50)).await;
    cache.get().await;
    assert_eq!(cache.source().calls(), 8);
}

/// Repository metadata answers, the releases listing does not. Release
/// downloads go through the trait's default summing.
struct ReleasesDown;

#[async_trait]
impl StatsSource for ReleasesDown {
    async fn pypi_downloads(&self) -> Result<u64, UpstreamError> {
        Ok(500)
    }

    async fn github_stars(&self) -> Result<u64, UpstreamError> {
        Ok(12_345)
    }

    async fn github_commits(&self) -> Result<u64, UpstreamError> {
        Ok(2_001)
    }

    async fn releases(&self) -> Result<Vec<Release>, UpstreamError> {
        Err(UpstreamError::Timeout(Duration::from_secs(5)))
    }
}

#[tokio::test(start_paused = true)]
async fn failed_releases_only_degrade_release_downloads() {
    let cache = StatsCache::new(ReleasesDown);
    let snapshot = cache.get().await;
    assert_eq!(
        *snapshot,
        StatsSnapshot {
            pypi_downloads: "500".to_owned(),
            github_downloads: NOT_AVAILABLE.to_owned(),
            github_stars: "12,345".to_owned(),
            github_commits: "2,001".to_owned(),
        }
    );
}

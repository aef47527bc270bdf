use clyp_stats::{HttpStatsSource, StatsCache, StatsSource};

use crate::banner::BannerStore;
use crate::config::SiteConfig;
use crate::SiteError;

/// Everything a request handler can reach. Shared behind an `Arc`.
pub struct AppState<S = HttpStatsSource> {
    pub stats: StatsCache<S>,
    pub banners: BannerStore,
    pub pypi_package: String,
    pub github_url: String,
    pub max_body_bytes: usize,
}

impl<S: StatsSource> AppState<S> {
    /// State over an arbitrary stats source, tuned by `config`.
    pub fn with_source(source: S, config: &SiteConfig) -> Self {
        Self {
            stats: StatsCache::new(source)
                .with_ttl(config.stats_ttl())
                .with_upstream_timeout(config.upstream_timeout()),
            banners: BannerStore::new(config.banner_path.clone()),
            pypi_package: config.pypi_package.clone(),
            github_url: config.github_url(),
            max_body_bytes: config.max_body_bytes,
        }
    }
}

impl AppState<HttpStatsSource> {
    /// Production state: live stats from the configured upstreams.
    pub fn from_config(config: &SiteConfig) -> Result<Self, SiteError> {
        let source = HttpStatsSource::new(config.upstream())?;
        Ok(Self::with_source(source, config))
    }
}

//! Command-line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clyp_stats::UpstreamConfig;

/// Every option can also be set through its environment variable.
#[derive(Clone, Debug, Parser)]
#[command(name = "clyp-site", version, about = "Serve the Clyp website API")]
pub struct SiteConfig {
    /// Address to listen on.
    #[arg(long, env = "CLYP_SITE_ADDR", default_value = "0.0.0.0:5000")]
    pub addr: SocketAddr,

    /// PyPI package whose downloads are reported.
    #[arg(long, env = "CLYP_PYPI_PACKAGE", default_value = "clyp")]
    pub pypi_package: String,

    #[arg(long, env = "CLYP_GITHUB_OWNER", default_value = "clyplang")]
    pub github_owner: String,

    #[arg(long, env = "CLYP_GITHUB_REPO", default_value = "clyp")]
    pub github_repo: String,

    /// Token for GitHub API requests; raises the rate limit.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    #[arg(long, env = "CLYP_PYPISTATS_URL", default_value = "https://pypistats.org")]
    pub pypistats_url: String,

    #[arg(long, env = "CLYP_GITHUB_API_URL", default_value = "https://api.github.com")]
    pub github_api_url: String,

    /// Seconds a stats snapshot is served before it is refreshed.
    #[arg(long, env = "CLYP_STATS_TTL_SECS", default_value_t = 60)]
    pub stats_ttl_secs: u64,

    /// Upper bound, in seconds, on each upstream call.
    #[arg(long, env = "CLYP_UPSTREAM_TIMEOUT_SECS", default_value_t = 5)]
    pub upstream_timeout_secs: u64,

    /// JSON file with the rotating site banners.
    #[arg(long, env = "CLYP_BANNER_PATH", default_value = "banner.json")]
    pub banner_path: PathBuf,

    /// Largest accepted request body, in bytes.
    #[arg(long, env = "CLYP_MAX_BODY_BYTES", default_value_t = 1_048_576)]
    pub max_body_bytes: usize,
}

impl SiteConfig {
    pub fn stats_ttl(&self) -> Duration {
        Duration::from_secs(self.stats_ttl_secs)
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }

    /// Public repository page, the target of `/github`.
    pub fn github_url(&self) -> String {
        format!("https://github.com/{}/{}", self.github_owner, self.github_repo)
    }

    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig {
            pypi_package: self.pypi_package.clone(),
            github_owner: self.github_owner.clone(),
            github_repo: self.github_repo.clone(),
            github_token: self.github_token.clone(),
            pypistats_url: self.pypistats_url.clone(),
            github_api_url: self.github_api_url.clone(),
            timeout: self.upstream_timeout(),
            ..UpstreamConfig::default()
        }
    }
}

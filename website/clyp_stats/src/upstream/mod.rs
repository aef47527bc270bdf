//! HTTP-backed [`StatsSource`]: pypistats.org and the GitHub REST API.

mod link;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, LINK};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::release::Release;
use crate::{StatsSource, UpstreamError, DEFAULT_UPSTREAM_TIMEOUT};

pub use link::last_page;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Where to find the project upstream and how to talk to it.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub pypi_package: String,
    pub github_owner: String,
    pub github_repo: String,
    /// Sent as a bearer token on GitHub requests when present.
    pub github_token: Option<String>,
    pub pypistats_url: String,
    pub github_api_url: String,
    /// Per-request client timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            pypi_package: "clyp".to_owned(),
            github_owner: "clyplang".to_owned(),
            github_repo: "clyp".to_owned(),
            github_token: None,
            pypistats_url: "https://pypistats.org".to_owned(),
            github_api_url: "https://api.github.com".to_owned(),
            timeout: DEFAULT_UPSTREAM_TIMEOUT,
            user_agent: concat!("clyp-site/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl UpstreamConfig {
    fn pypi_recent_url(&self) -> String {
        format!(
            "{}/api/packages/{}/recent",
            self.pypistats_url.trim_end_matches('/'),
            self.pypi_package
        )
    }

    fn repo_url(&self) -> String {
        format!(
            "{}/repos/{}/{}",
            self.github_api_url.trim_end_matches('/'),
            self.github_owner,
            self.github_repo
        )
    }
}

#[derive(Deserialize)]
struct RecentDownloads {
    data: Option<RecentDownloadsData>,
}

#[derive(Deserialize)]
struct RecentDownloadsData {
    last_month: Option<u64>,
}

#[derive(Deserialize)]
struct RepoMetadata {
    stargazers_count: Option<u64>,
}

/// Fetches raw metrics over HTTP with a shared `reqwest` client.
#[derive(Clone, Debug)]
pub struct HttpStatsSource {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl HttpStatsSource {
    /// Build the client. Fails only if TLS or the resolver cannot be set up.
    pub fn new(config: UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn github_get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url).header(ACCEPT, GITHUB_MEDIA_TYPE);
        match &self.config.github_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, UpstreamError> {
        let response = request.send().await.map_err(|source| UpstreamError::Transport {
            url: url.to_owned(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_owned(),
                status,
            });
        }
        Ok(response)
    }
}

async fn decode<T: DeserializeOwned>(response: Response, url: &str) -> Result<T, UpstreamError> {
    response.json().await.map_err(|source| UpstreamError::Decode {
        url: url.to_owned(),
        source,
    })
}

fn commit_count_from_link(headers: &HeaderMap) -> Option<u64> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(last_page)
}

#[async_trait]
impl StatsSource for HttpStatsSource {
    async fn pypi_downloads(&self) -> Result<u64, UpstreamError> {
        let url = self.config.pypi_recent_url();
        let response = self.send(self.client.get(&url), &url).await?;
        let recent: RecentDownloads = decode(response, &url).await?;
        recent
            .data
            .and_then(|data| data.last_month)
            .ok_or(UpstreamError::MissingField {
                url,
                field: "data.last_month",
            })
    }

    async fn github_stars(&self) -> Result<u64, UpstreamError> {
        let url = self.config.repo_url();
        let response = self.send(self.github_get(&url), &url).await?;
        let repo: RepoMetadata = decode(response, &url).await?;
        repo.stargazers_count.ok_or(UpstreamError::MissingField {
            url,
            field: "stargazers_count",
        })
    }

    async fn github_commits(&self) -> Result<u64, UpstreamError> {
        let url = format!("{}/commits?per_page=1", self.config.repo_url());
        let response = self.send(self.github_get(&url), &url).await?;
        if let Some(count) = commit_count_from_link(response.headers()) {
            return Ok(count);
        }

        // No pagination: everything fits on the single page we asked for.
        let commits: Vec<serde_json::Value> = decode(response, &url).await?;
        Ok(commits.len() as u64)
    }

    /// First page of releases, in GitHub order.
    async fn releases(&self) -> Result<Vec<Release>, UpstreamError> {
        let url = format!("{}/releases", self.config.repo_url());
        let response = self.send(self.github_get(&url), &url).await?;
        decode(response, &url).await
    }
}

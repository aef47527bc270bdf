//! GitHub release records and the release page lookup.
//!
//! [`Release`] mirrors the subset of the GitHub releases payload the site
//! reads; every field tolerates absence so a partially filled release never
//! fails the whole list.

use serde::{Deserialize, Serialize};

/// One entry of `GET /repos/{owner}/{repo}/releases`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// A downloadable file attached to a release.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub download_count: u64,
    #[serde(default)]
    pub browser_download_url: Option<String>,
}

impl Release {
    /// The human label: `name` when set and non-empty, else `tag_name`.
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }

    /// Whether this release is `version`: the tag or the name, with leading
    /// `v`s removed, must equal it exactly.
    pub fn matches_version(&self, version: &str) -> bool {
        strip_v(&self.tag_name) == version
            || self.name.as_deref().is_some_and(|name| strip_v(name) == version)
    }

    /// Sum of `download_count` over all assets.
    pub fn download_count(&self) -> u64 {
        self.assets
            .iter()
            .fold(0u64, |acc, asset| acc.saturating_add(asset.download_count))
    }
}

fn strip_v(s: &str) -> &str {
    s.trim_start_matches('v')
}

/// Total asset downloads across every release.
pub fn total_downloads(releases: &[Release]) -> u64 {
    releases
        .iter()
        .fold(0u64, |acc, release| acc.saturating_add(release.download_count()))
}

/// First release in `releases` matching `version`.
pub fn find_release<'a>(releases: &'a [Release], version: &str) -> Option<&'a Release> {
    releases.iter().find(|release| release.matches_version(version))
}

/// Maturity of a release, derived from its label.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    Alpha,
    Beta,
    Rc,
    Release,
}

impl ReleaseType {
    /// Classify by case-insensitive substring: `alpha`, then `beta`, then
    /// `rc` / `release candidate`.
    pub fn classify(label: &str) -> Self {
        let label = label.to_ascii_lowercase();
        if label.contains("alpha") {
            Self::Alpha
        } else if label.contains("beta") {
            Self::Beta
        } else if label.contains("rc") || label.contains("release candidate") {
            Self::Rc
        } else {
            Self::Release
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Beta => "beta",
            Self::Rc => "rc",
            Self::Release => "release",
        }
    }
}

/// Data rendered by the release page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReleaseDetails {
    pub version: String,
    pub base_version: String,
    pub release_type: ReleaseType,
    pub release_date: String,
    /// Raw release notes, as written on GitHub.
    pub description: String,
    /// The notes rendered from Markdown, `clyp` code blocks highlighted.
    pub description_html: String,
    pub pip_command: Option<String>,
    pub tar_gz_url: Option<String>,
    pub github_url: Option<String>,
}

impl ReleaseDetails {
    /// Assemble page data for `release`, requested as `version`, published
    /// on PyPI as `package`.
    ///
    /// Pre-releases display as `{version}-[{type}]` and install from their
    /// source tarball, when one is attached.
    pub fn new(release: &Release, version: &str, package: &str) -> Self {
        let release_type = ReleaseType::classify(release.label());
        let tar_gz_url = release
            .assets
            .iter()
            .find(|asset| asset.name.ends_with(".tar.gz"))
            .and_then(|asset| asset.browser_download_url.clone());

        let body = release.body.as_deref().unwrap_or_default();

        let (display, pip_command) = match release_type {
            ReleaseType::Release => (
                version.to_owned(),
                Some(format!("pip install {package}=={version}")),
            ),
            pre => (
                format!("{version}-[{}]", pre.as_str()),
                tar_gz_url.as_ref().map(|url| format!("pip install {url}")),
            ),
        };

        Self {
            version: display,
            base_version: version.to_owned(),
            release_type,
            release_date: release
                .published_at
                .as_deref()
                .map(format_release_date)
                .unwrap_or_default(),
            description: body.to_owned(),
            description_html: clyp_highlight::render_markdown(body),
            pip_command,
            tar_gz_url,
            github_url: release.html_url.clone(),
        }
    }
}

/// `2025-01-05T12:00:00Z` → `January 05, 2025`. Anything else is returned
/// unchanged.
pub fn format_release_date(raw: &str) -> String {
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ").map_or_else(
        |_| raw.to_owned(),
        |parsed| parsed.format("%B %d, %Y").to_string(),
    )
}

#[cfg(test)]
mod tests;

//! Rotating announcement banners, read from a JSON file.
//!
//! The file is re-read on each lookup so edits show up without a restart.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Seconds each banner stays current before the next one takes over.
pub const ROTATION_SECS: u64 = 30;

/// A banner entry. Fields other than `text` pass through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parse a banner file, keeping only entries with a non-empty `text`.
///
/// Anything that is not a JSON array yields no banners.
pub fn parse_banners(json: &str) -> Vec<Banner> {
    let Ok(entries) = serde_json::from_str::<Vec<Value>>(json) else {
        return Vec::new();
    };
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value::<Banner>(entry).ok())
        .filter(|banner| !banner.text.is_empty())
        .collect()
}

/// The banner shown at `unix_secs`.
pub fn current_at(banners: &[Banner], unix_secs: u64) -> Option<&Banner> {
    if banners.is_empty() {
        return None;
    }
    let slot = unix_secs / ROTATION_SECS;
    let index = usize::try_from(slot % banners.len() as u64).unwrap_or(0);
    banners.get(index)
}

/// Loads banners from a file path.
#[derive(Clone, Debug)]
pub struct BannerStore {
    path: PathBuf,
}

impl BannerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current banners. A missing or unreadable file means none.
    pub async fn load(&self) -> Vec<Banner> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(json) => parse_banners(&json),
            Err(err) => {
                tracing::debug!(path = %self.path.display(), error = %err, "no banner file");
                Vec::new()
            }
        }
    }

    /// The banner for the current 30-second slot, if any.
    pub async fn current(&self) -> Option<Banner> {
        let banners = self.load().await;
        let now = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0);
        current_at(&banners, now).cloned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn banners(texts: &[&str]) -> Vec<Banner> {
        texts
            .iter()
            .map(|text| Banner {
                text: (*text).to_owned(),
                extra: Map::new(),
            })
            .collect()
    }

    #[test]
    fn entries_without_text_are_dropped() {
        let parsed = parse_banners(
            r#"[{"text": "v1.0 is out", "link": "/release/1.0"}, {"text": ""}, {"link": "x"}, 3]"#,
        );
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].text, "v1.0 is out");
        assert_eq!(parsed[0].extra.get("link"), Some(&json!("/release/1.0")));
    }

    #[test]
    fn unknown_fields_round_trip() {
        let parsed = parse_banners(r#"[{"text": "hi", "color": "red", "priority": 2}]"#);
        let value = serde_json::to_value(&parsed[0]).unwrap_or_default();
        assert_eq!(value, json!({"text": "hi", "color": "red", "priority": 2}));
    }

    #[test]
    fn malformed_file_yields_nothing() {
        assert_eq!(parse_banners("{not json"), Vec::new());
        assert_eq!(parse_banners(r#"{"text": "object, not array"}"#), Vec::new());
    }

    #[test]
    fn rotates_every_thirty_seconds() {
        let list = banners(&["a", "b", "c"]);
        let at = |secs| current_at(&list, secs).map(|banner| banner.text.as_str());
        assert_eq!(at(0), Some("a"));
        assert_eq!(at(29), Some("a"));
        assert_eq!(at(30), Some("b"));
        assert_eq!(at(60), Some("c"));
        assert_eq!(at(90), Some("a"));
        assert_eq!(current_at(&[], 90), None);
    }

    #[tokio::test]
    async fn missing_file_means_no_banner() {
        let store = BannerStore::new("/nonexistent/clyp/banner.json");
        assert_eq!(store.load().await, Vec::new());
        assert_eq!(store.current().await, None);
    }
}

//! JSON endpoint handlers.

use std::panic::AssertUnwindSafe;

use clyp_stats::release::{find_release, ReleaseDetails};
use clyp_stats::{StatsSnapshot, StatsSource};
use futures::FutureExt;
use http::header::CACHE_CONTROL;
use http::{HeaderValue, StatusCode};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::Body;
use serde::{Deserialize, Serialize};

use super::{reply, SiteResponse};
use crate::{catalog, AppState};

#[derive(Deserialize)]
struct HighlightRequest {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

#[derive(Serialize)]
struct HighlightResponse {
    highlighted: String,
}

pub(super) async fn highlight<S, B>(state: &AppState<S>, body: B) -> SiteResponse
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let bytes = match Limited::new(body, state.max_body_bytes).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(err) if err.is::<LengthLimitError>() => {
            return reply::error(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large");
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to read request body");
            return reply::error(StatusCode::BAD_REQUEST, "Invalid request body");
        }
    };

    let Ok(request) = serde_json::from_slice::<HighlightRequest>(&bytes) else {
        return reply::error(StatusCode::BAD_REQUEST, "Invalid JSON body");
    };
    let code = match request.code {
        Some(code) if !code.is_empty() => code,
        _ => return reply::error(StatusCode::BAD_REQUEST, "Code is required"),
    };

    let highlighted = clyp_highlight::highlight_with_language(&code, request.language.as_deref());
    reply::json(StatusCode::OK, &HighlightResponse { highlighted })
}

pub(super) async fn live_stats<S: StatsSource>(state: &AppState<S>) -> SiteResponse {
    match AssertUnwindSafe(state.stats.get()).catch_unwind().await {
        Ok(snapshot) => {
            let mut response = reply::json(StatusCode::OK, &*snapshot);
            let max_age = format!("public, max-age={}", state.stats.ttl().as_secs());
            if let Ok(value) = HeaderValue::from_str(&max_age) {
                response.headers_mut().insert(CACHE_CONTROL, value);
            }
            response
        }
        Err(_) => {
            tracing::error!("stats refresh panicked");
            reply::json(StatusCode::INTERNAL_SERVER_ERROR, &StatsSnapshot::unavailable())
        }
    }
}

pub(super) fn examples() -> SiteResponse {
    let all: Vec<_> = catalog::EXAMPLES.iter().map(catalog::Example::highlighted).collect();
    reply::json(StatusCode::OK, &all)
}

pub(super) fn example(key: &str) -> SiteResponse {
    match catalog::find(key) {
        Some(example) => reply::json(StatusCode::OK, &example.highlighted()),
        None => reply::error(StatusCode::NOT_FOUND, &format!("Example '{key}' not found.")),
    }
}

pub(super) async fn release<S: StatsSource>(state: &AppState<S>, version: &str) -> SiteResponse {
    let releases = match state.stats.source().releases().await {
        Ok(releases) => releases,
        Err(err) => {
            tracing::warn!(error = %err, version, "release listing unavailable");
            return reply::error(StatusCode::BAD_GATEWAY, "Could not fetch releases");
        }
    };

    match find_release(&releases, version) {
        Some(found) => reply::json(
            StatusCode::OK,
            &ReleaseDetails::new(found, version, &state.pypi_package),
        ),
        None => reply::error(
            StatusCode::NOT_FOUND,
            &format!("Release '{version}' not found."),
        ),
    }
}

pub(super) async fn banner<S>(state: &AppState<S>) -> SiteResponse {
    reply::json(StatusCode::OK, &state.banners.current().await)
}

//! Request routing.
//!
//! [`dispatch`] is independent of the transport: it takes any
//! `http::Request` whose body implements [`Body`], which lets tests drive
//! it with in-memory bodies while the server feeds it hyper's `Incoming`.

mod api;
mod reply;

use std::panic::AssertUnwindSafe;
use std::time::Instant;

use bytes::Bytes;
use clyp_stats::StatsSource;
use futures::FutureExt;
use http::{Method, Request, Response, StatusCode};
use http_body_util::Full;
use hyper::body::Body;

use crate::AppState;

pub type SiteResponse = Response<Full<Bytes>>;

pub const DOWNLOAD_URL: &str = "https://clyp.codesft.dev/#get-started";
pub const WINDOWS_INSTALLER_URL: &str =
    "https://github.com/clyplang/clypinstaller/releases/latest/download/install.exe";
pub const DOCS_URL: &str = "https://clypdocs.codesft.dev";

/// A resolved path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Highlight,
    LiveStats,
    Examples,
    Example(String),
    Release(String),
    Banner,
    Download,
    WindowsInstaller,
    GitHub,
    Docs,
}

impl Route {
    /// Match a request path. Unknown paths are `None`.
    pub fn resolve(path: &str) -> Option<Self> {
        let route = match path {
            "/api/highlight" => Self::Highlight,
            "/api/live_stats" => Self::LiveStats,
            "/api/examples" => Self::Examples,
            "/api/banner" => Self::Banner,
            "/download" => Self::Download,
            "/download/win" | "/download/windows" => Self::WindowsInstaller,
            "/github" => Self::GitHub,
            "/docs" | "/docs/" => Self::Docs,
            _ => {
                if let Some(key) = single_segment(path, "/api/examples/") {
                    Self::Example(key.to_owned())
                } else if let Some(version) = single_segment(path, "/api/releases/") {
                    Self::Release(version.to_owned())
                } else if single_segment(path, "/docs/").is_some() {
                    Self::Docs
                } else {
                    return None;
                }
            }
        };
        Some(route)
    }

    /// The only method the route answers.
    pub fn method(&self) -> Method {
        match self {
            Self::Highlight => Method::POST,
            _ => Method::GET,
        }
    }
}

fn single_segment<'p>(path: &'p str, prefix: &str) -> Option<&'p str> {
    path.strip_prefix(prefix)
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
}

/// Answer one request. Never fails; a panicking handler becomes a 500.
pub async fn dispatch<S, B>(state: &AppState<S>, request: Request<B>) -> SiteResponse
where
    S: StatsSource,
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = match AssertUnwindSafe(route(state, request)).catch_unwind().await {
        Ok(response) => response,
        Err(_) => {
            tracing::error!(%method, %path, "handler panicked");
            reply::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
        }
    };

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        latency = ?started.elapsed(),
        "request"
    );
    response
}

async fn route<S, B>(state: &AppState<S>, request: Request<B>) -> SiteResponse
where
    S: StatsSource,
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let Some(route) = Route::resolve(request.uri().path()) else {
        return reply::error(StatusCode::NOT_FOUND, "Not found");
    };
    if request.method() != route.method() {
        return reply::error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    match route {
        Route::Highlight => api::highlight(state, request.into_body()).await,
        Route::LiveStats => api::live_stats(state).await,
        Route::Examples => api::examples(),
        Route::Example(key) => api::example(&key),
        Route::Release(version) => api::release(state, &version).await,
        Route::Banner => api::banner(state).await,
        Route::Download => reply::redirect(DOWNLOAD_URL),
        Route::WindowsInstaller => reply::redirect(WINDOWS_INSTALLER_URL),
        Route::GitHub => reply::redirect(&state.github_url),
        Route::Docs => reply::redirect(DOCS_URL),
    }
}

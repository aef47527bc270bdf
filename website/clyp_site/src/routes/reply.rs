//! Response builders.

use bytes::Bytes;
use http::header::{CONTENT_TYPE, LOCATION};
use http::{HeaderValue, Response, StatusCode};
use http_body_util::Full;
use serde::Serialize;

use super::SiteResponse;

const JSON: &str = "application/json";

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn with_body(status: StatusCode, body: impl Into<Bytes>) -> SiteResponse {
    let mut response = Response::new(Full::new(body.into()));
    *response.status_mut() = status;
    response
}

pub(crate) fn json<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> SiteResponse {
    match serde_json::to_vec(body) {
        Ok(bytes) => {
            let mut response = with_body(status, bytes);
            response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
            response
        }
        Err(err) => {
            tracing::error!(error = %err, "response serialization failed");
            let mut response = with_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"error":"Internal server error"}"#,
            );
            response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
            response
        }
    }
}

pub(crate) fn error(status: StatusCode, message: &str) -> SiteResponse {
    json(status, &ErrorBody { error: message })
}

/// `302 Found` to `location`.
pub(crate) fn redirect(location: &str) -> SiteResponse {
    let Ok(value) = HeaderValue::from_str(location) else {
        tracing::error!(location, "redirect target is not a valid header value");
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
    };
    let mut response = with_body(StatusCode::FOUND, Bytes::new());
    response.headers_mut().insert(LOCATION, value);
    response
}

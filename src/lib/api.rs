//! HTTP helpers for the OAuth Lab backend. Feature clients use these helpers to
//! avoid duplicating request setup. Requests are sent once: there is no retry,
//! timeout or backoff, and every transport failure collapses into
//! `AppError::Network`. The helpers return the raw status and body so callers can
//! decode the `{user}` / `{error}` envelope themselves.

use super::errors::AppError;
#[cfg(target_arch = "wasm32")]
use gloo_net::http::Request;
#[cfg(target_arch = "wasm32")]
use serde::Serialize;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// True for 2xx statuses, matching `Response.ok` in the browser.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Converts a non-2xx response into an `AppError::Http` with a sanitized body.
    pub fn into_http_error(self) -> AppError {
        AppError::Http {
            status: self.status,
            message: sanitize_body(&self.body),
        }
    }
}

/// Posts a JSON body.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize>(
    base_url: &str,
    path: &str,
    body: &B,
) -> Result<RawResponse, AppError> {
    let url = build_url_with_base(base_url, path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
    let request = Request::post(&url)
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    send(request).await
}

/// Posts without a body; parameters travel in the query string.
#[cfg(target_arch = "wasm32")]
pub async fn post_empty(base_url: &str, path: &str) -> Result<RawResponse, AppError> {
    let url = build_url_with_base(base_url, path);
    let request = Request::post(&url)
        .build()
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    send(request).await
}

/// Fetches a resource and keeps the body as text.
#[cfg(target_arch = "wasm32")]
pub async fn get_text(base_url: &str, path: &str) -> Result<RawResponse, AppError> {
    let url = build_url_with_base(base_url, path);
    let request = Request::get(&url)
        .build()
        .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))?;

    send(request).await
}

#[cfg(target_arch = "wasm32")]
async fn send(request: Request) -> Result<RawResponse, AppError> {
    let response = request.send().await.map_err(map_request_error)?;
    let status = response.status();
    let body = response.text().await.map_err(map_request_error)?;
    Ok(RawResponse { status, body })
}

/// Maps fetch failures into a single network error; DNS, refusal and CORS
/// failures are indistinguishable from the browser anyway.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    AppError::Network(format!("Unable to reach the server: {err}"))
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_ERROR_CHARS, RawResponse, build_url_with_base, sanitize_body};
    use crate::app_lib::AppError;

    #[test]
    fn build_url_joins_base_and_path_with_single_slash() {
        assert_eq!(
            build_url_with_base("http://localhost:8081/", "/api/users/login"),
            "http://localhost:8081/api/users/login"
        );
        assert_eq!(
            build_url_with_base(" http://localhost:8081 ", "oauth/authorize"),
            "http://localhost:8081/oauth/authorize"
        );
    }

    #[test]
    fn build_url_without_base_keeps_relative_path() {
        assert_eq!(build_url_with_base("", "/oauth/health"), "/oauth/health");
    }

    #[test]
    fn ok_covers_only_2xx() {
        let response = |status| RawResponse {
            status,
            body: String::new(),
        };
        assert!(response(200).ok());
        assert!(response(204).ok());
        assert!(!response(199).ok());
        assert!(!response(302).ok());
        assert!(!response(400).ok());
    }

    #[test]
    fn http_error_body_is_trimmed_and_truncated() {
        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        let err = RawResponse {
            status: 500,
            body: format!("  {long}  "),
        }
        .into_http_error();

        match err {
            AppError::Http { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message.chars().count(), MAX_ERROR_CHARS);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_error_body_gets_placeholder() {
        assert_eq!(sanitize_body("   "), "Request failed.");
    }
}

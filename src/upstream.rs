//! Upstream client for the TikWM resolver
//!
//! TikWM is a versionless third-party API, so its schema dependency is
//! isolated behind the [`MediaResolver`] trait: route handlers only ever see
//! "parsed JSON or an explicit failure", never a half-parsed success. Router
//! tests swap in a stub resolver; the real client is exercised against a
//! mock server in `tests/upstream_client.rs`.

use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use serde_json::Value;

/// Turns a TikTok URL into the resolver's raw JSON payload.
#[async_trait]
pub trait MediaResolver: Send + Sync {
    async fn resolve(&self, target_url: &str) -> Result<Value, ApiError>;
}

/// Reqwest-backed client for the TikWM `/api/` endpoint.
pub struct TikwmClient {
    http: reqwest::Client,
    base_url: String,
}

impl TikwmClient {
    /// Create a client against the given base URL (normally
    /// `https://www.tikwm.com`; tests point this at a local mock).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// TikWM rejects requests that do not look like its own web frontend.
    fn request_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/javascript, */*;q=0.1"),
        );
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static("application/x-www-form-urlencoded; charset=UTF-8"),
        );
        headers.insert(ORIGIN, HeaderValue::from_static("https://www.tikwm.com"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.tikwm.com/"));
        headers.insert(USER_AGENT, HeaderValue::from_static("Mozilla/5.0"));
        headers
    }
}

#[async_trait]
impl MediaResolver for TikwmClient {
    async fn resolve(&self, target_url: &str) -> Result<Value, ApiError> {
        let endpoint = format!("{}/api/", self.base_url);

        let response = self
            .http
            .post(&endpoint)
            .headers(Self::request_headers())
            .query(&[("url", target_url), ("hd", "1")])
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Upstream request failed to send");
                ApiError::Internal(err.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Upstream answered with non-success status");
            return Err(ApiError::UpstreamTransport {
                status: status.as_u16(),
            });
        }

        // A 2xx with an unparsable body is still an upstream failure, never
        // a silent malformed success.
        response
            .json::<Value>()
            .await
            .map_err(|_| ApiError::InvalidUpstreamResponse)
    }
}

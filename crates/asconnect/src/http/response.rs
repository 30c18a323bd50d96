//! HTTP response handling

use crate::error::{Error, Result};
use bytes::Bytes;
use futures::stream::BoxStream;
use http::{HeaderMap, HeaderValue, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Header carrying the caller's hourly quota, e.g.
/// `user-hour-lim:3600;user-hour-rem:3599;`.
const RATE_LIMIT_HEADER: &str = "x-rate-limit";

/// A fully-buffered HTTP response.
///
/// The body has been read to the end by the time this exists, so the
/// underlying connection is already back in the pool.
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    retries_taken: u32,
    elapsed: Duration,
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            retries_taken: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Attach retry and timing information.
    pub(crate) fn with_metadata(mut self, retries_taken: u32, elapsed: Duration) -> Self {
        self.retries_taken = retries_taken;
        self.elapsed = elapsed;
        self
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the raw body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Get the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Check if the response is successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Split off the metadata, dropping the body.
    pub fn into_meta(self) -> ResponseMeta {
        ResponseMeta {
            status: self.status,
            headers: self.headers,
            retries_taken: self.retries_taken,
            elapsed: self.elapsed,
        }
    }

    /// Classify the status and, on success, decode the body as JSON.
    ///
    /// Non-2xx statuses become [`Error::Api`] without touching `T`; a 2xx
    /// body that does not match `T` becomes [`Error::Decode`].
    pub fn into_parsed_raw<T: DeserializeOwned>(self) -> Result<RawResponse<T>> {
        self.check_status()?;
        let parsed = serde_json::from_slice(&self.body).map_err(|source| Error::Decode {
            status: self.status.as_u16(),
            source,
        })?;
        Ok(RawResponse {
            parsed,
            meta: self.into_meta(),
        })
    }

    /// Classify the status and discard the body.
    pub fn into_empty(self) -> Result<ResponseMeta> {
        self.check_status()?;
        Ok(self.into_meta())
    }

    fn check_status(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(Error::from_response(self.status.as_u16(), &self.text()))
        }
    }
}

/// A response whose body has not been read yet.
///
/// Used only for raw downloads; the body is a stream of chunks.
pub struct StreamingResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Body chunks
    pub body: BoxStream<'static, Result<Bytes>>,
}

impl std::fmt::Debug for StreamingResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamingResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Metadata of a completed response: everything but the body.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    status: StatusCode,
    headers: HeaderMap,
    retries_taken: u32,
    elapsed: Duration,
}

impl ResponseMeta {
    pub(crate) fn new(
        status: StatusCode,
        headers: HeaderMap,
        retries_taken: u32,
        elapsed: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            retries_taken,
            elapsed,
        }
    }

    /// Get the HTTP status as a `StatusCode`.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Get a reference to the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Number of retries taken for this request (0 if no retries).
    pub fn retries_taken(&self) -> u32 {
        self.retries_taken
    }

    /// Time elapsed for the complete request/response cycle, retries included.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get a specific header value by name.
    pub fn get_header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers.get(name)
    }

    /// Hourly request quota reported by the `X-Rate-Limit` header.
    pub fn rate_limit(&self) -> Option<RateLimit> {
        RateLimit::parse(self.headers.get(RATE_LIMIT_HEADER)?.to_str().ok()?)
    }
}

/// Raw response wrapper that provides access to both the decoded body and
/// HTTP metadata.
#[derive(Debug, Clone)]
pub struct RawResponse<T> {
    parsed: T,
    meta: ResponseMeta,
}

impl<T> RawResponse<T> {
    /// Create a raw response from a decoded body and its metadata.
    pub fn new(parsed: T, meta: ResponseMeta) -> Self {
        Self { parsed, meta }
    }

    /// Get a reference to the decoded body.
    pub fn parsed(&self) -> &T {
        &self.parsed
    }

    /// Consume this raw response and return the decoded body.
    pub fn into_parsed(self) -> T {
        self.parsed
    }

    /// Response metadata.
    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    /// Get the HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.meta.status_code()
    }

    /// Get a reference to the response headers.
    pub fn headers(&self) -> &HeaderMap {
        self.meta.headers()
    }

    /// Number of retries taken for this request (0 if no retries).
    pub fn retries_taken(&self) -> u32 {
        self.meta.retries_taken()
    }

    /// Time elapsed for the complete request/response cycle.
    pub fn elapsed(&self) -> Duration {
        self.meta.elapsed()
    }

    /// Get a specific header value by name.
    pub fn get_header(&self, name: &str) -> Option<&HeaderValue> {
        self.meta.get_header(name)
    }
}

/// Hourly request quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests allowed per hour
    pub limit: u32,
    /// Requests left in the current hour
    pub remaining: u32,
}

impl RateLimit {
    fn parse(header: &str) -> Option<Self> {
        let mut limit = None;
        let mut remaining = None;
        for part in header.split(';') {
            match part.trim().split_once(':') {
                Some(("user-hour-lim", v)) => limit = v.trim().parse().ok(),
                Some(("user-hour-rem", v)) => remaining = v.trim().parse().ok(),
                _ => {}
            }
        }
        Some(Self {
            limit: limit?,
            remaining: remaining?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_success_decodes() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), r#"{"name":"Demo"}"#)
            .with_metadata(2, Duration::from_millis(150));

        let raw: RawResponse<Named> = response.into_parsed_raw().unwrap();
        assert_eq!(raw.parsed().name, "Demo");
        assert_eq!(raw.status_code(), 200);
        assert_eq!(raw.retries_taken(), 2);
        assert_eq!(raw.elapsed(), Duration::from_millis(150));
    }

    #[test]
    fn test_error_status_never_decodes() {
        // Body would decode as Named, but the status wins.
        let response = Response::new(
            StatusCode::CONFLICT,
            HeaderMap::new(),
            r#"{"name":"Demo"}"#,
        );

        let err = response.into_parsed_raw::<Named>().unwrap_err();
        assert_eq!(err.status(), Some(409));
        assert!(matches!(err, Error::Api { .. }));
    }

    #[test]
    fn test_bad_body_is_decode_error() {
        let response = Response::new(StatusCode::OK, HeaderMap::new(), "<html>");

        let err = response.into_parsed_raw::<Named>().unwrap_err();
        assert!(matches!(err, Error::Decode { status: 200, .. }));
    }

    #[test]
    fn test_into_empty_ignores_body() {
        let meta = Response::new(StatusCode::NO_CONTENT, HeaderMap::new(), "")
            .into_empty()
            .unwrap();
        assert_eq!(meta.status(), StatusCode::NO_CONTENT);

        let err = Response::new(StatusCode::FORBIDDEN, HeaderMap::new(), "")
            .into_empty()
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_rate_limit_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-rate-limit",
            HeaderValue::from_static("user-hour-lim:3600;user-hour-rem:3598;"),
        );
        let meta = ResponseMeta::new(StatusCode::OK, headers, 0, Duration::ZERO);

        assert_eq!(
            meta.rate_limit(),
            Some(RateLimit {
                limit: 3600,
                remaining: 3598
            })
        );
    }

    #[test]
    fn test_rate_limit_missing_or_partial() {
        let meta = ResponseMeta::new(StatusCode::OK, HeaderMap::new(), 0, Duration::ZERO);
        assert_eq!(meta.rate_limit(), None);

        assert_eq!(RateLimit::parse("user-hour-lim:3600;"), None);
    }
}

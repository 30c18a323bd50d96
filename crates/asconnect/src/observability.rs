//! Structured logging for every call made through the client
//!
//! All requests and their outcomes are logged through this layer so that
//! field names stay consistent: `method`, `path`, `status`, `elapsed_ms`,
//! `retries`.

use crate::error::Error;
use crate::http::Request;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// HTTP request metadata for structured logging
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// HTTP method (GET, POST, etc.)
    pub method: String,
    /// URL path without the query string
    pub path: String,
    /// Request body size in bytes (optional)
    pub body_size: Option<usize>,
}

impl RequestMetadata {
    /// Create new request metadata
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            body_size: None,
        }
    }

    /// Describe a built request. Query strings carry cursors and filters,
    /// so only the path is kept.
    pub fn from_request(request: &Request) -> Self {
        Self {
            method: request.method().to_string(),
            path: request.url().path().to_string(),
            body_size: request.body().map(|b| b.len()),
        }
    }

    /// Log request being sent
    pub fn log_request(&self) {
        debug!(
            method = %self.method,
            path = %self.path,
            body_size = self.body_size,
            "Sending HTTP request"
        );
    }
}

/// HTTP response metadata for structured logging
#[derive(Debug, Clone)]
pub struct ResponseMetadata {
    /// HTTP status code, absent when no response arrived
    pub status: Option<u16>,
    /// Response body size in bytes (optional)
    pub body_size: Option<usize>,
    /// Time elapsed for the request, retries included
    pub elapsed: Duration,
    /// Number of retries taken (if any)
    pub retries: u32,
}

impl ResponseMetadata {
    /// Create new response metadata
    pub fn new(status: Option<u16>, elapsed: Duration) -> Self {
        Self {
            status,
            body_size: None,
            elapsed,
            retries: 0,
        }
    }

    /// Set the response body size
    pub fn with_body_size(mut self, size: usize) -> Self {
        self.body_size = Some(size);
        self
    }

    /// Set the number of retries
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Log successful response
    pub fn log_success(&self, request: &RequestMetadata) {
        info!(
            method = %request.method,
            path = %request.path,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis() as u64,
            body_size = self.body_size,
            retries = self.retries,
            "HTTP request succeeded"
        );
    }

    /// Log failed response
    pub fn log_error(&self, request: &RequestMetadata, error: &Error) {
        warn!(
            method = %request.method,
            path = %request.path,
            status = self.status,
            elapsed_ms = self.elapsed.as_millis() as u64,
            error = %error,
            retryable = error.is_retryable(),
            retries = self.retries,
            "HTTP request failed"
        );
    }
}

/// Timer for measuring request duration
pub struct RequestTimer {
    start: Instant,
}

impl RequestTimer {
    /// Start a new timer
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed duration
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

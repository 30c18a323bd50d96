//! Error types for the App Store Connect SDK
//!
//! Errors fall into four kinds, and only the first is ever retried:
//!
//! - transport: [`Error::Connection`], [`Error::Timeout`]
//! - API: [`Error::Api`], any non-2xx status
//! - decode: [`Error::Decode`], a 2xx body that did not match the expected shape
//! - construction: invalid URL, header, query or body, raised before any
//!   network call

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for operations that can fail with an SDK error.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SDK.
#[derive(Debug, Error)]
pub enum Error {
    /// The API rejected the request with a non-2xx status.
    ///
    /// `errors` holds the vendor problem list when the body parsed as
    /// `{"errors": [...]}`; `body` always holds the raw response text.
    #[error("API error (status {status}): {}", describe_problems(.errors, .body))]
    Api {
        /// HTTP status code
        status: u16,
        /// Parsed problem objects, empty if the body was not an error document
        errors: Vec<ApiProblem>,
        /// Raw response body
        body: String,
    },

    /// A successful response whose body did not decode into the expected type.
    #[error("Failed to decode response body (status {status}): {source}")]
    Decode {
        /// HTTP status code of the (successful) response
        status: u16,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Network or connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The configured request timeout elapsed.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Query parameters could not be flattened into `key=value` pairs.
    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),

    /// HTTP client configuration or request building error.
    #[error("HTTP client error: {0}")]
    HttpClient(String),

    /// Request body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error, e.g. while writing a download to its sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid HTTP header name.
    #[error("Invalid HTTP header name: {0}")]
    InvalidHeaderName(String),

    /// Invalid HTTP header value.
    #[error("Invalid HTTP header value: {0}")]
    InvalidHeaderValue(String),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        /// Context description
        context: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Other errors, typically raised by custom transports.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// The vendor's error document: `{"errors": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Problems reported for the request
    #[serde(default)]
    pub errors: Vec<ApiProblem>,
}

/// One problem object from an error document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiProblem {
    /// Machine-readable code, e.g. `NOT_FOUND` or `PARAMETER_ERROR.INVALID`
    pub code: String,
    /// Short summary
    pub title: String,
    /// Human-readable explanation
    pub detail: String,
    /// Unique id of this occurrence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// HTTP status as a string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// The part of the request that caused the problem
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ErrorSource>,
}

/// Location of the offending part of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorSource {
    /// JSON pointer into the request body
    Pointer {
        /// e.g. `/data/attributes/name`
        pointer: String,
    },
    /// Query parameter name
    Parameter {
        /// e.g. `filter[platform]`
        parameter: String,
    },
}

impl Error {
    /// Create an API error from an HTTP response status and body.
    ///
    /// The problem list is filled only when the body parses as the vendor's
    /// error document; otherwise the raw body is all there is.
    pub fn from_response(status: u16, body: &str) -> Self {
        let errors = serde_json::from_str::<ErrorResponse>(body)
            .map(|doc| doc.errors)
            .unwrap_or_default();

        Error::Api {
            status,
            errors,
            body: body.to_string(),
        }
    }

    /// Map a reqwest failure onto the transport / construction split.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_builder() {
            Error::HttpClient(err.to_string())
        } else if err.is_timeout() {
            Error::Timeout(err.to_string())
        } else {
            Error::Connection(err.to_string())
        }
    }

    /// Check if this error is retryable.
    ///
    /// Only transport-level failures qualify. API errors are returned to the
    /// caller, who knows whether e.g. a 401 warrants a fresh token.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Connection(_) | Error::Timeout(_))
    }

    /// HTTP status carried by API and decode errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Problem objects carried by an API error, empty otherwise.
    pub fn problems(&self) -> &[ApiProblem] {
        match self {
            Error::Api { errors, .. } => errors,
            _ => &[],
        }
    }

    /// `true` for a 404 API error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Api { status: 404, .. })
    }

    /// `true` for a 401 API error, typically an expired token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Api { status: 401, .. })
    }

    /// Add context to an error.
    pub fn context<C>(self, context: C) -> Self
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        Error::WithContext {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}

fn describe_problems(errors: &[ApiProblem], body: &str) -> String {
    if errors.is_empty() {
        return if body.is_empty() {
            "<empty body>".to_string()
        } else {
            body.to_string()
        };
    }
    errors
        .iter()
        .map(|p| format!("{} ({}): {}", p.title, p.code, p.detail))
        .collect::<Vec<_>>()
        .join("; ")
}

//! HTTP layer: requests, responses and the transport seam
//!
//! [`Request`] is plain data, [`HttpTransport`] sends one attempt of it, and
//! [`Client`](crate::Client) adds retry, status classification and decoding
//! on top.

pub use request::{Request, encode_query};
pub use response::{RateLimit, RawResponse, Response, ResponseMeta, StreamingResponse};
pub use transport::{HttpTransport, ReqwestTransport, ReqwestTransportBuilder};

mod request;
mod response;
mod transport;

// Re-export HTTP types from the http crate for convenience
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

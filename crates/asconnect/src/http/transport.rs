//! Transport trait for abstracting the HTTP backend
//!
//! A transport performs exactly one attempt of a fully-built [`Request`].
//! Retry, status classification and decoding live in
//! [`Client`](crate::Client), so a transport only has to move bytes and
//! report transport-level failures as [`Error::Connection`] or
//! [`Error::Timeout`].

use super::{Request, Response, StreamingResponse};
use crate::error::{Error, Result};
use async_trait::async_trait;
use futures::StreamExt;
use std::fmt;
use std::time::Duration;

/// Sends requests over the wire.
///
/// Implement this to run the client over a different HTTP stack, or to
/// script responses in tests.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Send the request and read the whole body.
    ///
    /// # Errors
    ///
    /// Returns a transport error if no response could be read. A response
    /// with an error status is still `Ok`.
    async fn send(&self, request: &Request) -> Result<Response>;

    /// Send the request and return the body as a stream of chunks.
    async fn send_streaming(&self, request: &Request) -> Result<StreamingResponse>;

    /// Transport name for debugging/logging.
    fn transport_name(&self) -> &'static str;
}

/// [`HttpTransport`] backed by `reqwest`.
///
/// # Example
///
/// ```rust,no_run
/// use asconnect::http::ReqwestTransport;
/// use std::time::Duration;
///
/// let transport = ReqwestTransport::builder()
///     .timeout(Duration::from_secs(60))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a new builder for configuring the transport.
    pub fn builder() -> ReqwestTransportBuilder {
        ReqwestTransportBuilder::default()
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_client(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }

    fn build_request(&self, request: &Request) -> reqwest::RequestBuilder {
        let mut builder = self
            .http_client
            .request(request.method().clone(), request.url().as_str())
            .headers(request.headers().clone());

        if let Some(body) = request.body() {
            builder = builder.body(body.clone());
        }

        builder
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &Request) -> Result<Response> {
        let response = self
            .build_request(request)
            .send()
            .await
            .map_err(Error::from_reqwest)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Error::from_reqwest)?;

        Ok(Response::new(status, headers, body))
    }

    async fn send_streaming(&self, request: &Request) -> Result<StreamingResponse> {
        let response = self
            .build_request(request)
            .send()
            .await
            .map_err(Error::from_reqwest)?;

        Ok(StreamingResponse {
            status: response.status(),
            headers: response.headers().clone(),
            body: response
                .bytes_stream()
                .map(|chunk| chunk.map_err(Error::from_reqwest))
                .boxed(),
        })
    }

    fn transport_name(&self) -> &'static str {
        "reqwest"
    }
}

/// Builder for [`ReqwestTransport`].
#[derive(Debug, Default)]
pub struct ReqwestTransportBuilder {
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    proxy: Option<String>,
}

impl ReqwestTransportBuilder {
    /// Per-attempt timeout covering connect, send and body read.
    ///
    /// Default: none
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Timeout for establishing the connection only.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Route all traffic through a proxy.
    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy = Some(url.into());
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the proxy URL is invalid or the TLS
    /// backend fails to initialise.
    pub fn build(self) -> Result<ReqwestTransport> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Error::HttpClient(format!("Invalid proxy '{}': {}", proxy, e)))?;
            builder = builder.proxy(proxy);
        }

        let http_client = builder
            .build()
            .map_err(|e| Error::HttpClient(e.to_string()))?;

        Ok(ReqwestTransport { http_client })
    }
}

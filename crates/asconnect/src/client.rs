//! Main client implementation for the App Store Connect API

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use asconnect_core::retry::{BackoffStrategy, ExponentialBackoff};
use futures::StreamExt;
use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use url::Url;

use crate::{
    config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, RetryConfig},
    error::{Error, Result},
    http::{
        HttpTransport, RawResponse, ReqwestTransport, Request, Response, ResponseMeta,
        StreamingResponse,
    },
    observability::{RequestMetadata, RequestTimer, ResponseMetadata},
    resources::{Apps, Builds, Provisioning, Reporting, Submissions, TestFlight, Users},
    types::Reference,
};

/// Client for the App Store Connect API.
///
/// Cloning is cheap: clones share the transport, base URL, headers and
/// retry policy. Resource handles (`client.apps()`, `client.builds()`, ...)
/// are thin wrappers holding a clone.
///
/// # Example
///
/// ```rust,no_run
/// use asconnect::Client;
/// use asconnect::types::ListAppsQuery;
///
/// # async fn example() -> asconnect::Result<()> {
/// let client = Client::new("eyJhbGciOi...");
/// let apps = client.apps().list(&ListAppsQuery::new().limit(10)).await?;
/// for app in &apps.data {
///     println!("{}", app.id);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    default_headers: HeaderMap,
    backoff: ExponentialBackoff,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("transport", &self.inner.transport.transport_name())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a new client with a bearer token.
    ///
    /// # Panics
    ///
    /// This convenience method panics if the client cannot be built with the default
    /// configuration. For fallible construction with explicit error handling, use
    /// [`Client::try_new()`] instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use asconnect::Client;
    ///
    /// let client = Client::new("eyJhbGciOi...");
    /// ```
    pub fn new(token: impl Into<String>) -> Self {
        Self::builder()
            .bearer_token(token)
            .build()
            .expect("Failed to build client with provided token")
    }

    /// Create a new client with a bearer token (fallible version).
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn try_new(token: impl Into<String>) -> Result<Self> {
        Self::builder().bearer_token(token).build()
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object, sending requests with
    /// a [`ReqwestTransport`].
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        let mut transport = ReqwestTransport::builder();
        if let Some(timeout) = config.timeout {
            transport = transport.timeout(timeout);
        }
        if let Some(proxy) = &config.proxy {
            transport = transport.proxy(proxy.clone());
        }
        Self::from_transport(Arc::new(transport.build()?), config)
    }

    /// Create a client that sends every request through `transport`.
    ///
    /// `timeout` and `proxy` in `config` are transport concerns and are
    /// ignored here; everything else applies.
    pub fn from_transport(transport: Arc<dyn HttpTransport>, config: ClientConfig) -> Result<Self> {
        let base_url = parse_base_url(config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        let default_headers = build_default_headers(&config)?;
        let backoff = config.retry.unwrap_or_default().to_backoff();

        tracing::debug!(
            base_url = %base_url,
            transport = transport.transport_name(),
            "App Store Connect client created"
        );

        Ok(Self {
            inner: Arc::new(ClientInner {
                transport,
                base_url,
                default_headers,
                backoff,
            }),
        })
    }

    /// Apps and App Store versions.
    pub fn apps(&self) -> Apps {
        Apps::new(self.clone())
    }

    /// Builds.
    pub fn builds(&self) -> Builds {
        Builds::new(self.clone())
    }

    /// Bundle IDs, certificates, devices and provisioning profiles.
    pub fn provisioning(&self) -> Provisioning {
        Provisioning::new(self.clone())
    }

    /// App Store version submissions.
    pub fn submissions(&self) -> Submissions {
        Submissions::new(self.clone())
    }

    /// TestFlight beta groups and testers.
    pub fn testflight(&self) -> TestFlight {
        TestFlight::new(self.clone())
    }

    /// Team users and invitations.
    pub fn users(&self) -> Users {
        Users::new(self.clone())
    }

    /// Sales report downloads.
    pub fn reporting(&self) -> Reporting {
        Reporting::new(self.clone())
    }

    /// Base URL relative paths are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Start a request with the default headers attached.
    ///
    /// An absolute `http(s)` URL is used as-is, which is how pagination
    /// links are followed. Anything else is resolved against the base URL,
    /// with or without a leading `/`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if the path cannot be resolved.
    pub fn request(&self, method: Method, path: &str) -> Result<Request> {
        let url = if path.starts_with("http://") || path.starts_with("https://") {
            Url::parse(path).map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))?
        } else {
            self.inner
                .base_url
                .join(path.trim_start_matches('/'))
                .map_err(|e| Error::InvalidUrl(format!("{}: {}", path, e)))?
        };
        Ok(Request::new(method, url).with_headers(&self.inner.default_headers))
    }

    /// Send a request and decode a JSON body.
    ///
    /// Transport failures are retried according to the retry policy; any
    /// HTTP status outside 2xx is returned immediately as [`Error::Api`].
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<RawResponse<T>> {
        self.dispatch(&request, Response::into_parsed_raw::<T>).await
    }

    /// Send a request whose response has no body worth decoding.
    pub async fn execute_empty(&self, request: Request) -> Result<ResponseMeta> {
        self.dispatch(&request, Response::into_empty).await
    }

    /// Send a request and stream the response body into `sink`.
    ///
    /// Only the initial send is retried. Once bytes start arriving a
    /// failure is returned as-is, since part of the body may already be in
    /// `sink`. Error statuses are read fully and returned as [`Error::Api`]
    /// without writing anything.
    pub async fn execute_to<W>(&self, request: Request, sink: &mut W) -> Result<ResponseMeta>
    where
        W: AsyncWrite + Unpin + Send + ?Sized,
    {
        let metadata = RequestMetadata::from_request(&request);
        metadata.log_request();
        let timer = RequestTimer::start();

        let attempts = AtomicU32::new(0);
        let transport = &self.inner.transport;
        let sent = self
            .inner
            .backoff
            .execute_if(
                || {
                    attempts.fetch_add(1, Ordering::Relaxed);
                    transport.send_streaming(&request)
                },
                Error::is_retryable,
            )
            .await;
        let retries = attempts.into_inner().saturating_sub(1);

        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                ResponseMetadata::new(None, timer.elapsed())
                    .with_retries(retries)
                    .log_error(&metadata, &err);
                return Err(err);
            }
        };
        let status = response.status;
        let mut written = 0usize;

        let result = copy_body(response, sink, &mut written).await;
        let outcome = ResponseMetadata::new(Some(status.as_u16()), timer.elapsed())
            .with_body_size(written)
            .with_retries(retries);
        match result {
            Ok(headers) => {
                outcome.log_success(&metadata);
                Ok(ResponseMeta::new(status, headers, retries, timer.elapsed()))
            }
            Err(err) => {
                outcome.log_error(&metadata, &err);
                Err(err)
            }
        }
    }

    /// `GET path` decoded as `T`.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.request(Method::GET, path)?;
        Ok(self.execute(request).await?.into_parsed())
    }

    /// `GET path?query` decoded as `T`.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.request(Method::GET, path)?.query(query)?;
        Ok(self.execute(request).await?.into_parsed())
    }

    /// `POST path` with a JSON body, decoded as `T`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path)?.json(body)?;
        Ok(self.execute(request).await?.into_parsed())
    }

    /// `PATCH path` with a JSON body, decoded as `T`.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PATCH, path)?.json(body)?;
        Ok(self.execute(request).await?.into_parsed())
    }

    /// `DELETE path`.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let request = self.request(Method::DELETE, path)?;
        self.execute_empty(request).await.map(drop)
    }

    /// `POST path` with a JSON body and no response body.
    pub async fn post_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.request(Method::POST, path)?.json(body)?;
        self.execute_empty(request).await.map(drop)
    }

    /// `PATCH path` with a JSON body and no response body.
    pub async fn patch_empty<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.request(Method::PATCH, path)?.json(body)?;
        self.execute_empty(request).await.map(drop)
    }

    /// `DELETE path` with a JSON body, as relationship removals require.
    pub async fn delete_with_body<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let request = self.request(Method::DELETE, path)?.json(body)?;
        self.execute_empty(request).await.map(drop)
    }

    /// `GET` a link returned by the API, such as `links.next`.
    ///
    /// ```rust,no_run
    /// # use asconnect::{Client, types::{AppsResponse, ListAppsQuery}};
    /// # async fn example(client: Client) -> asconnect::Result<()> {
    /// let mut page = client.apps().list(&ListAppsQuery::new()).await?;
    /// while let Some(next) = page.links.next.clone() {
    ///     page = client.follow::<AppsResponse>(&next).await?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn follow<T: DeserializeOwned>(&self, reference: &Reference) -> Result<T> {
        self.get(reference.as_str()).await
    }

    async fn dispatch<T>(
        &self,
        request: &Request,
        finish: impl FnOnce(Response) -> Result<T>,
    ) -> Result<T> {
        let metadata = RequestMetadata::from_request(request);
        metadata.log_request();
        let timer = RequestTimer::start();

        let attempts = AtomicU32::new(0);
        let transport = &self.inner.transport;
        let sent = self
            .inner
            .backoff
            .execute_if(
                || {
                    attempts.fetch_add(1, Ordering::Relaxed);
                    transport.send(request)
                },
                Error::is_retryable,
            )
            .await;
        let retries = attempts.into_inner().saturating_sub(1);
        let elapsed = timer.elapsed();

        let response = match sent {
            Ok(response) => response.with_metadata(retries, elapsed),
            Err(err) => {
                ResponseMetadata::new(None, elapsed)
                    .with_retries(retries)
                    .log_error(&metadata, &err);
                return Err(err);
            }
        };

        let outcome = ResponseMetadata::new(Some(response.status().as_u16()), elapsed)
            .with_body_size(response.body().len())
            .with_retries(retries);
        match finish(response) {
            Ok(value) => {
                outcome.log_success(&metadata);
                Ok(value)
            }
            Err(err) => {
                outcome.log_error(&metadata, &err);
                Err(err)
            }
        }
    }
}

async fn copy_body<W>(
    response: StreamingResponse,
    sink: &mut W,
    written: &mut usize,
) -> Result<HeaderMap>
where
    W: AsyncWrite + Unpin + Send + ?Sized,
{
    let StreamingResponse {
        status,
        headers,
        mut body,
    } = response;

    if !status.is_success() {
        let mut buf = Vec::new();
        while let Some(chunk) = body.next().await {
            buf.extend_from_slice(&chunk?);
        }
        return Err(Error::from_response(
            status.as_u16(),
            &String::from_utf8_lossy(&buf),
        ));
    }

    while let Some(chunk) = body.next().await {
        let chunk = chunk?;
        sink.write_all(&chunk).await?;
        *written += chunk.len();
    }
    sink.flush().await?;
    Ok(headers)
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidUrl("Base URL cannot be empty".to_string()));
    }

    let mut url =
        Url::parse(trimmed).map_err(|e| Error::InvalidUrl(format!("{}: {}", trimmed, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "unsupported scheme '{}' in {}, expected http or https",
            url.scheme(),
            trimmed
        )));
    }

    // `Url::join` drops the last segment unless the path ends in '/'.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn build_default_headers(config: &ClientConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let user_agent = config.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(user_agent)
            .map_err(|_| Error::InvalidHeaderValue(user_agent.to_string()))?,
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(token) = &config.bearer_token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::InvalidHeaderValue("Authorization: Bearer <redacted>".into()))?;
        value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, value);
    }

    for (name, value) in &config.default_headers {
        headers.insert(name.clone(), value.clone());
    }
    Ok(headers)
}

/// Builder for creating a configured [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    /// Start from an existing configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = self.config.merge(config);
        self
    }

    /// Set the bearer token sent with every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.config.bearer_token = Some(SecretString::new(token.into().into_boxed_str()));
        self
    }

    /// Set the base URL for the API.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    /// Set a per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the retry policy.
    pub fn retry(mut self, retry: RetryConfig) -> Self {
        self.config.retry = Some(retry);
        self
    }

    /// Set the maximum number of retries, keeping the rest of the policy.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        let retry = self.config.retry.get_or_insert_with(RetryConfig::default);
        retry.max_retries = Some(max_retries);
        self
    }

    /// Route requests through an HTTP proxy.
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.config.proxy = Some(proxy.into());
        self
    }

    /// Add a custom default header.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid according to HTTP specifications.
    pub fn default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self> {
        let key_str = key.into();
        let value_str = value.into();

        let key: HeaderName = key_str
            .parse()
            .map_err(|_| Error::InvalidHeaderName(key_str.clone()))?;
        let value: HeaderValue = value_str
            .parse()
            .map_err(|_| Error::InvalidHeaderValue(value_str.clone()))?;

        self.config.default_headers.insert(key, value);
        Ok(self)
    }

    /// Send requests through a custom transport instead of reqwest.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client with the configured options.
    pub fn build(self) -> Result<Client> {
        match self.transport {
            Some(transport) => Client::from_transport(transport, self.config),
            None => Client::from_config(self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_client_builder() {
        let client = Client::builder()
            .bearer_token("test-token")
            .base_url("https://example.com")
            .timeout(Duration::from_secs(30))
            .max_retries(3)
            .build();

        assert!(client.is_ok());
    }

    #[test]
    fn test_client_new_uses_default_base_url() {
        let client = Client::new("test-token");
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_clone_shares_inner() {
        let client1 = Client::new("test-token");
        let client2 = client1.clone();
        assert!(Arc::ptr_eq(&client1.inner, &client2.inner));
    }

    #[test]
    fn test_invalid_scheme_rejected() {
        let result = Client::builder().base_url("ftp://invalid.example.com").build();
        match result {
            Err(Error::InvalidUrl(msg)) => {
                assert!(msg.contains("ftp"), "Error should mention invalid scheme");
                assert!(msg.contains("http"), "Error should mention valid schemes");
            }
            other => panic!("Expected InvalidUrl error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = Client::builder().base_url("   ").build();
        assert_matches!(result, Err(Error::InvalidUrl(msg)) if msg.contains("empty"));
    }

    #[test]
    fn test_relative_paths_resolve_against_base() {
        let client = Client::builder()
            .base_url("https://proxy.example.com/asc")
            .build()
            .unwrap();

        let with_slash = client.request(Method::GET, "/v1/apps").unwrap();
        let without_slash = client.request(Method::GET, "v1/apps").unwrap();
        assert_eq!(
            with_slash.url().as_str(),
            "https://proxy.example.com/asc/v1/apps"
        );
        assert_eq!(with_slash.url(), without_slash.url());
    }

    #[test]
    fn test_absolute_path_bypasses_base() {
        let client = Client::new("test-token");
        let next = "https://api.appstoreconnect.apple.com/v1/apps?cursor=Mg.ABC&limit=2";
        let request = client.request(Method::GET, next).unwrap();
        assert_eq!(request.url().as_str(), next);
    }

    #[test]
    fn test_default_headers_attached() {
        let client = Client::builder()
            .bearer_token("secret")
            .default_header("x-trace", "abc")
            .unwrap()
            .build()
            .unwrap();
        let request = client.request(Method::GET, "v1/apps").unwrap();
        let headers = request.headers();

        assert_eq!(headers[header::AUTHORIZATION], "Bearer secret");
        assert!(headers[header::AUTHORIZATION].is_sensitive());
        assert_eq!(headers[header::ACCEPT], "application/json");
        assert_eq!(headers[header::USER_AGENT], DEFAULT_USER_AGENT);
        assert_eq!(headers["x-trace"], "abc");
    }

    #[test]
    fn test_no_authorization_without_token() {
        let client = Client::builder().build().unwrap();
        let request = client.request(Method::GET, "v1/apps").unwrap();
        assert!(request.headers().get(header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_invalid_default_header_name() {
        let result = Client::builder().default_header("bad header", "x");
        assert_matches!(result, Err(Error::InvalidHeaderName(name)) if name == "bad header");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = Client::new("very-secret-token");
        let debug = format!("{:?}", client);
        assert!(!debug.contains("very-secret-token"));
        assert!(debug.contains("reqwest"));
    }
}

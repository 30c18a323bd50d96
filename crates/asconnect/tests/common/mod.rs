//! Common test utilities and helpers

use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use asconnect::http::{HttpTransport, Request, Response, StatusCode, StreamingResponse};
use asconnect::{Client, ClientConfig, Error, Result, RetryConfig, async_trait};
use wiremock::MockServer;

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Create a test bearer token
#[allow(dead_code)]
pub fn test_token() -> String {
    "eyJhbGciOiJFUzI1NiIsImtpZCI6IlRFU1QiLCJ0eXAiOiJKV1QifQ.test.signature".to_string()
}

/// Retry policy that keeps tests fast
#[allow(dead_code)]
pub fn fast_retry(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries: Some(max_retries),
        initial_delay: Duration::from_millis(1),
        max_delay: Duration::from_millis(5),
        jitter: 0.0,
        ..RetryConfig::default()
    }
}

/// Client pointed at a mock server
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> Client {
    init_tracing();
    Client::builder()
        .bearer_token(test_token())
        .base_url(server.uri())
        .retry(fast_retry(2))
        .build()
        .expect("Failed to build client")
}

/// Client sending through a scripted transport
#[allow(dead_code)]
pub fn scripted_client(transport: Arc<ScriptedTransport>, max_retries: u32) -> Client {
    init_tracing();
    let config = ClientConfig {
        retry: Some(fast_retry(max_retries)),
        ..ClientConfig::with_token(test_token())
    };
    Client::from_transport(transport, config).expect("Failed to build client")
}

/// Route SDK logs to the test output; `RUST_LOG=asconnect=debug` to see them.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One scripted outcome of [`ScriptedTransport::send`].
#[allow(dead_code)]
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Fail with a connection error
    ConnectionError,
    /// Fail with a timeout
    Timeout,
    /// Return a response with this status and body
    Respond(u16, &'static str),
}

/// An [`HttpTransport`] that plays back a script and records what it saw.
///
/// When the script runs out, the last step repeats.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Step>>,
    last: Mutex<Option<Step>>,
    sent: Mutex<Vec<Request>>,
}

#[allow(dead_code)]
impl ScriptedTransport {
    pub fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(steps.into()),
            ..Default::default()
        })
    }

    /// Number of send attempts seen
    pub fn attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    /// Requests seen, in order
    pub fn requests(&self) -> Vec<Request> {
        self.sent.lock().unwrap().clone()
    }

    fn next_step(&self) -> Step {
        let mut script = self.script.lock().unwrap();
        let mut last = self.last.lock().unwrap();
        if let Some(step) = script.pop_front() {
            *last = Some(step);
        }
        last.expect("empty script")
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: &Request) -> Result<Response> {
        self.sent.lock().unwrap().push(request.clone());
        match self.next_step() {
            Step::ConnectionError => Err(Error::Connection("connection refused".to_string())),
            Step::Timeout => Err(Error::Timeout("operation timed out".to_string())),
            Step::Respond(status, body) => Ok(Response::new(
                StatusCode::from_u16(status).unwrap(),
                Default::default(),
                body.as_bytes().to_vec(),
            )),
        }
    }

    async fn send_streaming(&self, request: &Request) -> Result<StreamingResponse> {
        let response = self.send(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = bytes::Bytes::copy_from_slice(response.body());
        Ok(StreamingResponse {
            status,
            headers,
            body: Box::pin(futures::stream::iter(vec![Ok(body)])),
        })
    }

    fn transport_name(&self) -> &'static str {
        "scripted"
    }
}

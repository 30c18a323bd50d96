//! Configuration for the App Store Connect client

use asconnect_core::retry::{BackoffStrategy, ExponentialBackoff};
use http::HeaderMap;
use secrecy::SecretString;
use std::time::Duration;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.appstoreconnect.apple.com/";

/// Default `User-Agent` header value.
pub const DEFAULT_USER_AGENT: &str = concat!("asconnect-rust/", env!("CARGO_PKG_VERSION"));

/// Configuration for the App Store Connect client.
///
/// Every field is optional; unset fields fall back to the defaults applied
/// when the client is built. A config is immutable once handed to a client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL for the API. Default: [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,

    /// Bearer token sent as `Authorization: Bearer <token>`
    pub bearer_token: Option<SecretString>,

    /// `User-Agent` header value. Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: Option<String>,

    /// Per-attempt timeout. Default: none
    pub timeout: Option<Duration>,

    /// Retry policy for transport failures. Default: [`RetryConfig::default`]
    pub retry: Option<RetryConfig>,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,

    /// HTTP proxy URL
    pub proxy: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration with a bearer token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            bearer_token: Some(SecretString::new(token.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `ASC_TOKEN` for the bearer token
    /// - `ASC_BASE_URL` for the API base URL
    /// - `ASC_TIMEOUT` for the per-attempt timeout (in seconds)
    /// - `ASC_MAX_RETRIES` for the maximum number of retries
    /// - `ASC_MAX_ELAPSED` for the total retry budget (in seconds)
    /// - `ASC_PROXY` for HTTP proxy
    ///
    /// Unparseable numbers are logged and ignored.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        let mut config = Self::default();

        if let Ok(token) = env::var("ASC_TOKEN") {
            config.bearer_token = Some(SecretString::new(token.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("ASC_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Some(secs) = parse_var::<u64>("ASC_TIMEOUT") {
            config.timeout = Some(Duration::from_secs(secs));
        }

        let max_retries = parse_var::<u32>("ASC_MAX_RETRIES");
        let max_elapsed = parse_var::<u64>("ASC_MAX_ELAPSED");
        if max_retries.is_some() || max_elapsed.is_some() {
            let mut retry = RetryConfig::default();
            if let Some(max_retries) = max_retries {
                retry.max_retries = Some(max_retries);
            }
            if let Some(secs) = max_elapsed {
                retry.max_elapsed_time = Some(Duration::from_secs(secs));
            }
            config.retry = Some(retry);
        }

        if let Ok(proxy) = env::var("ASC_PROXY") {
            config.proxy = Some(proxy);
        }

        Ok(config)
    }

    /// Load a `.env` file from the current directory (if any), then read the
    /// environment as [`from_env`](Self::from_env) does.
    #[cfg(feature = "env")]
    pub fn from_dotenv() -> Result<Self, crate::error::Error> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            tracing::warn!(error = %e, "failed to load .env file");
        }
        Self::from_env()
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.bearer_token.is_some() {
            self.bearer_token = other.bearer_token;
        }
        if other.user_agent.is_some() {
            self.user_agent = other.user_agent;
        }
        if other.timeout.is_some() {
            self.timeout = other.timeout;
        }
        if other.retry.is_some() {
            self.retry = other.retry;
        }
        for (key, value) in other.default_headers.iter() {
            self.default_headers.insert(key.clone(), value.clone());
        }
        if other.proxy.is_some() {
            self.proxy = other.proxy;
        }

        self
    }
}

#[cfg(feature = "env")]
fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "ignoring unparseable environment variable");
            None
        }
    }
}

/// Retry policy for transport-level failures.
///
/// The default is finite: 5 retries, 500ms initial delay doubling up to
/// 30s, 10% jitter, and at most 2 minutes spent retrying in total.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Retries after the first attempt; `None` for no cap
    pub max_retries: Option<u32>,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound on a single delay
    pub max_delay: Duration,
    /// Growth factor between consecutive delays
    pub multiplier: f64,
    /// Random spread applied to each delay, in `[0.0, 1.0]`
    pub jitter: f64,
    /// Total retry budget from the first attempt; `None` for no bound
    pub max_elapsed_time: Option<Duration>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::from(&ExponentialBackoff::default())
    }
}

impl RetryConfig {
    /// Never retry.
    pub fn none() -> Self {
        Self {
            max_retries: Some(0),
            ..Self::default()
        }
    }

    /// Retry transport failures until success or cancellation.
    ///
    /// Bound the call from the outside (`tokio::time::timeout`, dropping the
    /// future) when using this against hosts that may be unreachable.
    pub fn unbounded() -> Self {
        Self {
            max_retries: None,
            max_elapsed_time: None,
            ..Self::default()
        }
    }

    pub(crate) fn to_backoff(&self) -> ExponentialBackoff {
        let mut builder = ExponentialBackoff::builder()
            .initial_delay(self.initial_delay)
            .max_delay(self.max_delay)
            .multiplier(self.multiplier)
            .jitter(self.jitter);

        builder = match self.max_retries {
            Some(max) => builder.max_retries(max),
            None => builder.unlimited_retries(),
        };
        builder = match self.max_elapsed_time {
            Some(limit) => builder.max_elapsed_time(limit),
            None => builder.no_elapsed_limit(),
        };

        builder.build()
    }
}

impl From<&ExponentialBackoff> for RetryConfig {
    fn from(backoff: &ExponentialBackoff) -> Self {
        Self {
            max_retries: backoff.max_retries(),
            initial_delay: backoff.initial_delay(),
            max_delay: backoff.max_delay(),
            multiplier: backoff.multiplier(),
            jitter: backoff.jitter(),
            max_elapsed_time: backoff.max_elapsed_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use secrecy::ExposeSecret;

    #[test]
    fn test_retry_defaults_are_finite() {
        let retry = RetryConfig::default();

        assert_eq!(retry.max_retries, Some(5));
        assert_eq!(retry.initial_delay, Duration::from_millis(500));
        assert_eq!(retry.max_delay, Duration::from_secs(30));
        assert_eq!(retry.multiplier, 2.0);
        assert_eq!(retry.jitter, 0.1);
        assert_eq!(retry.max_elapsed_time, Some(Duration::from_secs(120)));
    }

    #[test]
    fn test_retry_to_backoff_roundtrips() {
        for retry in [
            RetryConfig::default(),
            RetryConfig::none(),
            RetryConfig::unbounded(),
        ] {
            assert_eq!(RetryConfig::from(&retry.to_backoff()), retry);
        }
    }

    #[test]
    fn test_unbounded_has_no_limits() {
        let backoff = RetryConfig::unbounded().to_backoff();
        assert_eq!(backoff.max_retries(), None);
        assert_eq!(backoff.max_elapsed_time(), None);
    }

    #[test]
    fn test_with_token() {
        let config = ClientConfig::with_token("jwt");
        assert_eq!(config.bearer_token.unwrap().expose_secret(), "jwt");
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = ClientConfig::with_token("old");
        base.base_url = Some("https://a.example/".to_string());
        base.default_headers
            .insert("x-keep", HeaderValue::from_static("1"));

        let mut other = ClientConfig::with_token("new");
        other.timeout = Some(Duration::from_secs(5));
        other
            .default_headers
            .insert("x-add", HeaderValue::from_static("2"));

        let merged = base.merge(other);
        assert_eq!(merged.bearer_token.unwrap().expose_secret(), "new");
        assert_eq!(merged.base_url.as_deref(), Some("https://a.example/"));
        assert_eq!(merged.timeout, Some(Duration::from_secs(5)));
        assert_eq!(merged.default_headers.len(), 2);
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            [
                ("ASC_TOKEN", Some("env-token")),
                ("ASC_BASE_URL", Some("http://localhost:9999/")),
                ("ASC_TIMEOUT", Some("45")),
                ("ASC_MAX_RETRIES", Some("2")),
                ("ASC_MAX_ELAPSED", None),
                ("ASC_PROXY", None),
            ],
            || {
                let config = ClientConfig::from_env().unwrap();
                assert_eq!(config.bearer_token.unwrap().expose_secret(), "env-token");
                assert_eq!(config.base_url.as_deref(), Some("http://localhost:9999/"));
                assert_eq!(config.timeout, Some(Duration::from_secs(45)));

                let retry = config.retry.unwrap();
                assert_eq!(retry.max_retries, Some(2));
                assert_eq!(retry.max_elapsed_time, Some(Duration::from_secs(120)));
                assert!(config.proxy.is_none());
            },
        );
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_from_env_ignores_garbage_numbers() {
        temp_env::with_vars(
            [
                ("ASC_TOKEN", None),
                ("ASC_TIMEOUT", Some("soon")),
                ("ASC_MAX_RETRIES", Some("-1")),
                ("ASC_MAX_ELAPSED", None),
            ],
            || {
                let config = ClientConfig::from_env().unwrap();
                assert!(config.bearer_token.is_none());
                assert!(config.timeout.is_none());
                assert!(config.retry.is_none());
            },
        );
    }
}

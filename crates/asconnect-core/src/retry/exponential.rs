//! Exponential backoff with jitter.

use super::strategy::BackoffStrategy;
use std::time::Duration;

const DEFAULT_MAX_RETRIES: u32 = 5;
const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(500);
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);
const DEFAULT_MULTIPLIER: f64 = 2.0;
const DEFAULT_JITTER: f64 = 0.1;
const DEFAULT_MAX_ELAPSED_TIME: Duration = Duration::from_secs(120);

/// Exponential backoff strategy with configurable jitter.
///
/// Delays between retries increase exponentially: `initial_delay * multiplier^attempt`,
/// randomised by `jitter` and capped at `max_delay`.
///
/// ```text
/// base_delay   = initial_delay * (multiplier ^ n)
/// jittered     = base_delay * (1 + jitter * random(-1.0, +1.0))
/// final_delay  = min(jittered, max_delay)
/// ```
///
/// Retrying stops after `max_retries` retries or once the next sleep would
/// push the total past `max_elapsed_time`, whichever comes first. Both
/// bounds are finite by default; [`ExponentialBackoffBuilder::unbounded`]
/// removes them for callers that cancel from the outside instead.
///
/// # Examples
///
/// ```rust
/// use asconnect_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// // Defaults: 5 retries, 500ms initial, 30s cap, x2, 10% jitter, 2 min budget
/// let backoff = ExponentialBackoff::default();
///
/// let backoff = ExponentialBackoff::builder()
///     .max_retries(8)
///     .initial_delay(Duration::from_millis(100))
///     .max_delay(Duration::from_secs(10))
///     .max_elapsed_time(Duration::from_secs(60))
///     .build();
///
/// let result = backoff.execute(|| async {
///     Ok::<_, std::io::Error>(42)
/// }).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExponentialBackoff {
    max_retries: Option<u32>,
    initial_delay: Duration,
    max_delay: Duration,
    multiplier: f64,
    jitter: f64,
    max_elapsed_time: Option<Duration>,
}

impl ExponentialBackoff {
    /// Create a new builder for configuring exponential backoff.
    pub fn builder() -> ExponentialBackoffBuilder {
        ExponentialBackoffBuilder::default()
    }

    /// A strategy that never retries.
    pub fn none() -> Self {
        Self::builder().max_retries(0).build()
    }

    /// Delay before the first retry.
    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    /// Upper bound on a single delay.
    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }

    /// Growth factor between consecutive delays.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// Jitter factor in `[0.0, 1.0]`.
    pub fn jitter(&self) -> f64 {
        self.jitter
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl BackoffStrategy for ExponentialBackoff {
    fn next_delay(&self, attempt: u32) -> Option<Duration> {
        let max_delay = self.max_delay.as_secs_f64();
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);

        // f64::min drops NaN, so an overflowing base lands on max_delay
        let base_delay = (self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent))
            .min(max_delay);

        // base * jitter * random(-1.0, +1.0)
        let jittered = if self.jitter > 0.0 {
            let jitter_amount = base_delay * self.jitter * (rand::random::<f64>() - 0.5) * 2.0;
            base_delay + jitter_amount
        } else {
            base_delay
        };

        Some(Duration::from_secs_f64(jittered.clamp(0.0, max_delay)))
    }

    fn max_retries(&self) -> Option<u32> {
        self.max_retries
    }

    fn max_elapsed_time(&self) -> Option<Duration> {
        self.max_elapsed_time
    }
}

/// Builder for configuring `ExponentialBackoff`.
///
/// # Examples
///
/// ```rust
/// use asconnect_core::retry::ExponentialBackoff;
/// use std::time::Duration;
///
/// let backoff = ExponentialBackoff::builder()
///     .max_retries(5)
///     .initial_delay(Duration::from_millis(100))
///     .max_delay(Duration::from_secs(30))
///     .multiplier(2.0)
///     .jitter(0.1)
///     .build();
/// ```
#[derive(Debug)]
pub struct ExponentialBackoffBuilder {
    max_retries: Option<u32>,
    initial_delay: Duration,
    max_delay: Duration,
    multiplier: f64,
    jitter: f64,
    max_elapsed_time: Option<Duration>,
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self {
            max_retries: Some(DEFAULT_MAX_RETRIES),
            initial_delay: DEFAULT_INITIAL_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            multiplier: DEFAULT_MULTIPLIER,
            jitter: DEFAULT_JITTER,
            max_elapsed_time: Some(DEFAULT_MAX_ELAPSED_TIME),
        }
    }
}

impl ExponentialBackoffBuilder {
    /// Set the maximum number of retry attempts.
    ///
    /// Default: 5
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Remove the retry count cap. Retrying is then bounded only by
    /// [`max_elapsed_time`](Self::max_elapsed_time), if set.
    pub fn unlimited_retries(mut self) -> Self {
        self.max_retries = None;
        self
    }

    /// Set the initial delay before the first retry.
    ///
    /// Default: 500ms
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Set the maximum delay between retries.
    ///
    /// Default: 30s
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    /// Set the exponential multiplier. Values below 1.0 are raised to 1.0.
    ///
    /// Default: 2.0
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = if multiplier.is_finite() {
            multiplier.max(1.0)
        } else {
            DEFAULT_MULTIPLIER
        };
        self
    }

    /// Set the jitter factor (0.0 to 1.0). A jitter of 0.1 lets the delay
    /// vary by ±10%.
    ///
    /// Default: 0.1
    pub fn jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter.clamp(0.0, 1.0);
        self
    }

    /// Stop retrying once the next sleep would take the total time past
    /// `limit`.
    ///
    /// Default: 2 minutes
    pub fn max_elapsed_time(mut self, limit: Duration) -> Self {
        self.max_elapsed_time = Some(limit);
        self
    }

    /// Remove the elapsed-time budget.
    pub fn no_elapsed_limit(mut self) -> Self {
        self.max_elapsed_time = None;
        self
    }

    /// Remove both the retry cap and the elapsed-time budget.
    ///
    /// The resulting strategy retries until the operation succeeds, fails
    /// with a non-retryable error, or the caller drops the future.
    pub fn unbounded(self) -> Self {
        self.unlimited_retries().no_elapsed_limit()
    }

    /// Build the `ExponentialBackoff` instance.
    pub fn build(self) -> ExponentialBackoff {
        ExponentialBackoff {
            max_retries: self.max_retries,
            initial_delay: self.initial_delay,
            max_delay: self.max_delay,
            multiplier: self.multiplier,
            jitter: self.jitter,
            max_elapsed_time: self.max_elapsed_time,
        }
    }
}

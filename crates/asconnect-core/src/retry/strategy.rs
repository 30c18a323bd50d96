//! The `BackoffStrategy` trait and the shared retry loop.

use async_trait::async_trait;
use std::error::Error;
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// A strategy for retrying failed operations with backoff.
///
/// Implementations decide how long to wait between attempts and when to
/// give up. Which errors are worth retrying is decided either by
/// [`should_retry`](Self::should_retry) or, per call, by the predicate
/// passed to [`execute_if`](Self::execute_if).
///
/// An operation is attempted once, then retried while all of these hold:
///
/// - the error is retryable,
/// - fewer than [`max_retries`](Self::max_retries) retries have been made
///   (`None` means no cap),
/// - [`next_delay`](Self::next_delay) returns `Some`,
/// - sleeping for that delay would not exceed
///   [`max_elapsed_time`](Self::max_elapsed_time) measured from the first
///   attempt.
///
/// Dropping the returned future cancels the in-flight attempt and every
/// retry after it.
///
/// # Examples
///
/// ```rust
/// use asconnect_core::retry::{BackoffStrategy, ExponentialBackoff};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let backoff = ExponentialBackoff::builder()
///     .max_retries(3)
///     .initial_delay(Duration::from_millis(100))
///     .build();
///
/// let result = backoff.execute(|| async {
///     Ok::<_, std::io::Error>(42)
/// }).await?;
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait BackoffStrategy: Send + Sync {
    /// Execute an operation, retrying errors accepted by
    /// [`should_retry`](Self::should_retry).
    async fn execute<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Error + Send + Sync + 'static,
    {
        retry(self, operation, |err: &E, attempt| {
            self.should_retry(err, attempt)
        })
        .await
    }

    /// Execute an operation, retrying only errors for which `retryable`
    /// returns `true`. Any other error is returned immediately.
    async fn execute_if<F, Fut, T, E, P>(&self, operation: F, retryable: P) -> Result<T, E>
    where
        F: Fn() -> Fut + Send + Sync,
        Fut: Future<Output = Result<T, E>> + Send,
        T: Send,
        E: Send,
        P: Fn(&E) -> bool + Send + Sync,
    {
        retry(self, operation, |err: &E, _attempt| retryable(err)).await
    }

    /// Determine if an error is retryable.
    ///
    /// Default implementation returns `true` for all errors.
    fn should_retry(&self, error: &dyn Error, attempt: u32) -> bool {
        let _ = (error, attempt);
        true
    }

    /// Delay before retry number `attempt + 1` (`attempt` is 0-indexed).
    ///
    /// Returning `None` stops retrying.
    fn next_delay(&self, attempt: u32) -> Option<Duration>;

    /// Maximum number of retries after the initial attempt. `None` means
    /// retries are capped only by [`max_elapsed_time`](Self::max_elapsed_time).
    fn max_retries(&self) -> Option<u32>;

    /// Upper bound on the total time spent retrying, measured from the
    /// start of the first attempt. `None` means no bound.
    fn max_elapsed_time(&self) -> Option<Duration> {
        None
    }
}

/// The retry loop shared by every [`BackoffStrategy`].
///
/// `retryable` receives the error and the 0-indexed retry count. Custom
/// strategies that override neither `execute` nor `execute_if` get this
/// loop for free; it is public so wrappers can drive it with their own
/// predicate.
pub async fn retry<S, F, Fut, T, E, P>(strategy: &S, operation: F, mut retryable: P) -> Result<T, E>
where
    S: BackoffStrategy + ?Sized,
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: FnMut(&E, u32) -> bool,
{
    let started = Instant::now();
    let mut attempt = 0u32;

    loop {
        let err = match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !retryable(&err, attempt) {
            return Err(err);
        }
        if strategy.max_retries().is_some_and(|max| attempt >= max) {
            return Err(err);
        }
        let Some(delay) = strategy.next_delay(attempt) else {
            return Err(err);
        };
        if let Some(limit) = strategy.max_elapsed_time()
            && started.elapsed() + delay > limit
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                attempt,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "giving up: retry budget exhausted"
            );
            return Err(err);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            attempt = attempt + 1,
            delay_ms = delay.as_millis() as u64,
            "retrying after transient failure"
        );

        drop(err);
        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}

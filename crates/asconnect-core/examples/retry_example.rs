//! Retrying only transient failures with `execute_if`
//!
//! Simulates an upload endpoint that drops the connection twice before
//! answering, and a second call that is rejected outright.
//!
//! Run with:
//! ```bash
//! cargo run -p asconnect-core --example retry_example
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use asconnect_core::prelude::*;

#[derive(Debug)]
enum CallError {
    ConnectionReset,
    Rejected(u16),
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallError::ConnectionReset => write!(f, "connection reset by peer"),
            CallError::Rejected(status) => write!(f, "rejected with status {}", status),
        }
    }
}

impl std::error::Error for CallError {}

impl CallError {
    fn is_transient(&self) -> bool {
        matches!(self, CallError::ConnectionReset)
    }
}

/// Fails with a connection reset `failures` times, then succeeds.
struct FlakyEndpoint {
    calls: AtomicU32,
    failures: u32,
}

impl FlakyEndpoint {
    fn new(failures: u32) -> Self {
        Self {
            calls: AtomicU32::new(0),
            failures,
        }
    }

    async fn call(&self) -> Result<&'static str, CallError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            println!("  attempt {}: connection reset", call + 1);
            Err(CallError::ConnectionReset)
        } else {
            println!("  attempt {}: ok", call + 1);
            Ok("build uploaded")
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let backoff = ExponentialBackoff::builder()
        .max_retries(3)
        .initial_delay(Duration::from_millis(100))
        .jitter(0.0)
        .max_elapsed_time(Duration::from_secs(5))
        .build();

    println!("Transient failures are retried:");
    let endpoint = FlakyEndpoint::new(2);
    let start = Instant::now();
    let result = backoff
        .execute_if(|| endpoint.call(), CallError::is_transient)
        .await?;
    println!("  -> {} after {:?} (expected ~300ms)", result, start.elapsed());

    println!("\nRejections are returned immediately:");
    let calls = AtomicU32::new(0);
    let result = backoff
        .execute_if(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err::<(), _>(CallError::Rejected(409))
            },
            CallError::is_transient,
        )
        .await;
    if let Err(err) = result {
        println!(
            "  -> {} after {} attempt(s)",
            err,
            calls.load(Ordering::SeqCst)
        );
    }

    Ok(())
}

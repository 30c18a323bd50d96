//! Retry strategies and backoff implementations.
//!
//! # Key Types
//!
//! - [`BackoffStrategy`] - Core trait for retry strategies
//! - [`ExponentialBackoff`] - Exponential backoff with jitter, bounded by
//!   attempt count and total elapsed time
//!
//! # Examples
//!
//! ```rust
//! use asconnect_core::retry::{BackoffStrategy, ExponentialBackoff};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backoff = ExponentialBackoff::builder()
//!     .max_retries(3)
//!     .max_elapsed_time(Duration::from_secs(10))
//!     .build();
//!
//! // Only retry errors the caller considers transient.
//! let result = backoff
//!     .execute_if(
//!         || async { Ok::<_, std::io::Error>(42) },
//!         |err: &std::io::Error| err.kind() == std::io::ErrorKind::ConnectionRefused,
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod exponential;
mod strategy;

pub use exponential::{ExponentialBackoff, ExponentialBackoffBuilder};
pub use strategy::{BackoffStrategy, retry};

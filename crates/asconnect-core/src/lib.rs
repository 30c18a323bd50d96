#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Core primitives for the asconnect crates.
//!
//! The only concern living here is retrying: the [`retry::BackoffStrategy`]
//! trait and the [`retry::ExponentialBackoff`] implementation used by the
//! SDK transport to ride out connection-level failures.
//!
//! Nothing in this crate knows about HTTP. Callers decide which errors are
//! transient by passing a predicate to
//! [`BackoffStrategy::execute_if`](retry::BackoffStrategy::execute_if).
//!
//! # Examples
//!
//! ```rust
//! use asconnect_core::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let backoff = ExponentialBackoff::builder()
//!     .max_retries(3)
//!     .initial_delay(Duration::from_millis(100))
//!     .build();
//!
//! let result = backoff.execute(|| async {
//!     Ok::<_, std::io::Error>(42)
//! }).await?;
//! # Ok(())
//! # }
//! ```

pub mod retry;

/// Convenient re-exports of commonly used items.
///
/// ```rust
/// use asconnect_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::retry::{BackoffStrategy, ExponentialBackoff, ExponentialBackoffBuilder};
}

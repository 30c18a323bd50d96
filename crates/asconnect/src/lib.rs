//! # asconnect
//!
//! Async client for the App Store Connect REST API:
//! - Typed JSON:API documents for apps, builds, provisioning, TestFlight,
//!   users and submissions
//! - Query structs that encode to `filter[...]`/`fields[...]` parameters
//! - Cursor pagination through `links.next`
//! - Automatic retries of connection-level failures
//! - Streaming downloads of gzip sales reports
//!
//! Authentication is a bearer token you supply; signing App Store Connect
//! API keys into tokens happens outside this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use asconnect::Client;
//! use asconnect::types::{AppsResponse, ListAppsQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(std::env::var("ASC_TOKEN")?);
//!
//!     let mut page = client
//!         .apps()
//!         .list(&ListAppsQuery::new().limit(50))
//!         .await?;
//!     loop {
//!         for app in &page.data {
//!             let name = app.attributes.as_ref().and_then(|a| a.name.as_deref());
//!             println!("{} {:?}", app.id, name);
//!         }
//!         match page.links.next.clone() {
//!             Some(next) => page = client.follow::<AppsResponse>(&next).await?,
//!             None => break,
//!         }
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, RetryConfig};
pub use error::{ApiProblem, Error, Result};
pub use crate::http::{RawResponse, ResponseMeta};

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod observability;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use asconnect::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Error, Result, RetryConfig,
        http::HttpTransport,
        types::{DataResponse, Included, ListResponse, Reference, ResourceObject},
    };
}

/// SDK version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(config::DEFAULT_USER_AGENT.ends_with(VERSION));
    }
}

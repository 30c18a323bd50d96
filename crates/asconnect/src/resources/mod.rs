//! API resource endpoints
//!
//! One handle per area of the API. Each method formats a path, attaches a
//! query or body, and hands off to one of the [`Client`] verbs.

pub mod apps;
pub mod builds;
pub mod provisioning;
pub mod reporting;
pub mod submissions;
pub mod testflight;
pub mod users;

pub use apps::{Apps, AppsRaw};
pub use builds::Builds;
pub use provisioning::Provisioning;
pub use reporting::Reporting;
pub use submissions::Submissions;
pub use testflight::TestFlight;
pub use users::Users;

use crate::client::Client;

/// Base trait for API resources.
pub trait Resource {
    /// Get a reference to the client.
    fn client(&self) -> &Client;
}

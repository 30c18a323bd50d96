//! App Store Connect data types
//!
//! Every resource is a [`ResourceObject`] parameterised by its attributes
//! and relationships, wrapped in a [`DataResponse`] or [`ListResponse`]
//! document. Query structs serialize straight into URL parameters, and
//! request bodies are built from [`RequestBody`] envelopes.

pub mod apps;
pub mod builds;
pub mod common;
pub mod included;
pub mod provisioning;
pub mod reporting;
pub mod submission;
pub mod testflight;
pub mod users;

pub use apps::*;
pub use builds::*;
pub use common::*;
pub use included::Included;
pub use provisioning::*;
pub use reporting::*;
pub use submission::*;
pub use testflight::*;
pub use users::*;

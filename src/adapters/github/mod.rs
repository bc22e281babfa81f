//! GitHub adapter
//!
//! - [`tracker`] - `IssueTracker` over the REST API
//! - [`event`] - Webhook payload parsing
//! - [`wire`] - JSON shapes shared by both

pub mod event;
pub mod tracker;
pub mod wire;

pub use event::{load_event, parse_event};
pub use tracker::GitHubTracker;

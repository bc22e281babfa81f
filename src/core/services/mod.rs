//! Business logic services
//!
//! Orchestration logic that operates on domain models. Services reach the
//! outside world only through the port traits, so every one of them runs
//! against mocks in tests.
//!
//! - [`classifier`] - Severity tiers from labels
//! - [`collector`] - Window-narrowed tracker activity
//! - [`narrative`] - Oracle digest, prompt and answer parsing
//! - [`assembler`] - Report document layout
//! - [`publisher`] - Record upsert and notification
//! - [`messages`] - Notification builders
//! - [`events`] - Sync and notify flows for a single event
//! - [`pipeline`] - The daily report run

pub mod assembler;
pub mod classifier;
pub mod collector;
pub mod events;
pub mod messages;
pub mod narrative;
pub mod pipeline;
pub mod publisher;

pub use assembler::{assemble, report_title};
pub use classifier::{SeverityBuckets, classify, classify_labels, triage_items};
pub use collector::{Activity, collect};
pub use events::{event_status, notify_event, sync_event};
pub use messages::{event_notification, report_notification};
pub use narrative::{build_digest, parse_narrative, summarize};
pub use pipeline::{ReportOutcome, ReportPorts, run_report};
pub use publisher::{item_draft, notify, report_draft, upsert};

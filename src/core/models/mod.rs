//! Domain models for repo-pulse
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ActivityItem`] - A normalized issue or pull request
//! - [`Severity`] - Triage tier derived from labels
//! - [`TimeWindow`] - The reporting window
//! - [`ReportDocument`] - Blocks of an assembled report
//! - [`Narrative`] - Oracle output, possibly degraded
//! - [`WorkspaceStatus`] - Status of a workspace record
//! - [`RecordDraft`] / [`RecordRef`] - Workspace records
//! - [`Notification`] - Chat message before channel rendering
//! - [`SourceEvent`] - A webhook event on an item

mod activity;
mod document;
mod event;
mod narrative;
mod notification;
mod record;
mod severity;
mod status;
mod window;

pub use activity::{ActivityItem, ItemKind, ItemState};
pub use document::{Block, HeadingLevel, ReportDocument};
pub use event::{PullDetails, SourceEvent};
pub use narrative::{Narrative, NarrativeQuality};
pub use notification::{Delivery, Field, Notification};
pub use record::{RecordDraft, RecordKey, RecordRef, RecordType, UpsertOutcome};
pub use severity::Severity;
pub use status::{StatusMap, WorkspaceStatus};
pub use window::TimeWindow;

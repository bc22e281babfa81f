//! Tracker events that drive record sync and notifications

use serde::{Deserialize, Serialize};

use super::{ActivityItem, ItemKind, ItemState};

/// Branch details of a pull request event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullDetails {
    /// Source branch
    pub head: String,
    /// Target branch
    pub base: String,
    /// Draft pull request
    #[serde(default)]
    pub draft: bool,
}

/// A single observed event on an issue or pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEvent {
    /// Webhook action, e.g. `opened`, `assigned`, `closed`
    pub action: String,
    /// The item the event is about
    pub item: ActivityItem,
    /// Login of the item author
    pub author: String,
    /// Present for pull request events
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull: Option<PullDetails>,
}

impl SourceEvent {
    /// Check if the event is about a pull request
    #[must_use]
    pub fn is_pull_request(&self) -> bool {
        self.item.kind == ItemKind::PullRequest
    }

    /// Check if the event is about a merged pull request
    #[must_use]
    pub fn is_merged(&self) -> bool {
        self.item.state == ItemState::Merged
    }
}

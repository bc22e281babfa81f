//! Activity items fetched from the issue tracker
//!
//! An [`ActivityItem`] is the normalized form of a GitHub issue or pull
//! request. Items are immutable once fetched within a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether an item is an issue or a pull request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// A plain issue
    Issue,
    /// A pull request
    PullRequest,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Issue => write!(f, "issue"),
            Self::PullRequest => write!(f, "pull_request"),
        }
    }
}

/// Lifecycle state of an item in the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemState {
    /// Still open
    Open,
    /// Closed (for pull requests: closed without merge)
    Closed,
    /// Pull request merged
    Merged,
}

impl ItemState {
    /// Lowercase name, used as the key of the status map
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Merged => "merged",
        }
    }
}

impl std::fmt::Display for ItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized issue or pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Issue or pull request number
    pub id: u64,

    /// Title as shown in the tracker
    pub title: String,

    /// Issue or pull request
    pub kind: ItemKind,

    /// Current state
    pub state: ItemState,

    /// Label names (order preserved, duplicates removed)
    #[serde(default)]
    pub labels: Vec<String>,

    /// Assignee logins in tracker order
    #[serde(default)]
    pub assignees: Vec<String>,

    /// When the item was opened
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// When the item was closed or merged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<DateTime<Utc>>,

    /// Last update reported by the tracker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Browser URL of the item
    pub url: String,

    /// Description text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ActivityItem {
    /// Create an item with the required fields; everything else starts empty
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, kind: ItemKind, url: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            state: ItemState::Open,
            labels: Vec::new(),
            assignees: Vec::new(),
            created_at: None,
            closed_at: None,
            updated_at: None,
            url: url.into(),
            body: None,
        }
    }

    /// Set labels, dropping duplicates while keeping first occurrence order
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.clear();
        for label in labels {
            let label = label.into();
            if !self.labels.contains(&label) {
                self.labels.push(label);
            }
        }
        self
    }

    /// Set assignees
    #[must_use]
    pub fn with_assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = assignees.into_iter().map(Into::into).collect();
        self
    }

    /// Set state
    #[must_use]
    pub const fn with_state(mut self, state: ItemState) -> Self {
        self.state = state;
        self
    }

    /// Reference used in titles and digests, e.g. `#42`
    #[must_use]
    pub fn reference(&self) -> String {
        format!("#{}", self.id)
    }
}

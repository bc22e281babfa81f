//! GitHub REST and webhook payload shapes
//!
//! Issues, pull requests from the pulls API and the objects inside webhook
//! payloads share enough fields to decode into one struct.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::models::{ActivityItem, ItemKind, ItemState, PullDetails};

/// A label object
#[derive(Debug, Clone, Deserialize)]
pub struct GhLabel {
    /// Label name
    pub name: String,
}

/// A user object
#[derive(Debug, Clone, Deserialize)]
pub struct GhUser {
    /// Login
    pub login: String,
}

/// A branch reference of a pull request
#[derive(Debug, Clone, Deserialize)]
pub struct GhRef {
    /// Branch name
    #[serde(rename = "ref")]
    pub name: String,
}

/// The `pull_request` marker on items from the issues API
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct GhPullMarker {
    /// Set when the pull request was merged
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// An issue or pull request
#[derive(Debug, Clone, Deserialize)]
pub struct GhIssue {
    /// Issue or pull request number
    pub number: u64,
    /// Title
    pub title: String,
    /// `open` or `closed`
    pub state: String,
    /// Browser URL
    pub html_url: String,
    /// Description
    #[serde(default)]
    pub body: Option<String>,
    /// Labels
    #[serde(default)]
    pub labels: Vec<GhLabel>,
    /// Assignees
    #[serde(default)]
    pub assignees: Vec<GhUser>,
    /// Author
    #[serde(default)]
    pub user: Option<GhUser>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Close time
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    /// Last update
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Present on pull requests listed through the issues API
    #[serde(default)]
    pub pull_request: Option<GhPullMarker>,
    /// Merge time (pulls API and webhooks)
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
    /// Merged flag (webhooks)
    #[serde(default)]
    pub merged: Option<bool>,
    /// Draft flag
    #[serde(default)]
    pub draft: Option<bool>,
    /// Source branch
    #[serde(default)]
    pub head: Option<GhRef>,
    /// Target branch
    #[serde(default)]
    pub base: Option<GhRef>,
}

impl GhIssue {
    /// Check if the object describes a pull request
    #[must_use]
    pub const fn is_pull_request(&self) -> bool {
        self.pull_request.is_some() || self.head.is_some()
    }

    fn is_merged(&self) -> bool {
        self.merged == Some(true)
            || self.merged_at.is_some()
            || self.pull_request.as_ref().is_some_and(|p| p.merged_at.is_some())
    }

    /// Author login, if the payload carries one
    #[must_use]
    pub fn author(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }

    /// Branch details for pull requests
    #[must_use]
    pub fn pull_details(&self) -> Option<PullDetails> {
        match (&self.head, &self.base) {
            (Some(head), Some(base)) => Some(PullDetails {
                head: head.name.clone(),
                base: base.name.clone(),
                draft: self.draft.unwrap_or(false),
            }),
            _ => None,
        }
    }

    /// Normalize into an [`ActivityItem`]
    #[must_use]
    pub fn into_item(self) -> ActivityItem {
        let kind = if self.is_pull_request() { ItemKind::PullRequest } else { ItemKind::Issue };
        let state = if kind == ItemKind::PullRequest && self.is_merged() {
            ItemState::Merged
        } else if self.state == "closed" {
            ItemState::Closed
        } else {
            ItemState::Open
        };

        let mut item = ActivityItem::new(self.number, self.title, kind, self.html_url)
            .with_labels(self.labels.into_iter().map(|l| l.name))
            .with_assignees(self.assignees.into_iter().map(|a| a.login))
            .with_state(state);
        item.created_at = self.created_at;
        item.closed_at = self.closed_at.or(self.merged_at);
        item.updated_at = self.updated_at;
        item.body = self.body;
        item
    }
}

/// Search API response, only the count is used
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GhSearchCount {
    /// Number of matching items
    pub total_count: usize,
}

//! Workspace records
//!
//! Drafts describe what the publisher wants to exist in the workspace;
//! refs describe what is already there.

use serde::{Deserialize, Serialize};

use super::{Block, WorkspaceStatus};

/// Kind of record, written to the workspace type field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordType {
    /// Tracks an issue
    Issue,
    /// Tracks a pull request
    #[serde(rename = "PR")]
    PullRequest,
    /// A generated activity report
    Report,
}

impl RecordType {
    /// Select option name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Issue => "Issue",
            Self::PullRequest => "PR",
            Self::Report => "Report",
        }
    }
}

/// Key used to find an existing record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "value", rename_all = "snake_case")]
pub enum RecordKey {
    /// Exact match on the URL field
    Url(String),
    /// Title contains the given text
    TitleContains(String),
    /// Title opens with the item reference `#42` or `PR #42` as a whole token
    ItemReference(String),
}

impl RecordKey {
    /// Check a found record against the key
    ///
    /// Lookups are coarse (`#7` also finds `#70 ...`), so reference keys
    /// re-check the title. A reference match with no readable title is
    /// rejected.
    #[must_use]
    pub fn accepts(&self, record: &RecordRef) -> bool {
        match self {
            Self::Url(_) | Self::TitleContains(_) => true,
            Self::ItemReference(reference) => record
                .title
                .as_deref()
                .is_some_and(|title| title_references(title, reference)),
        }
    }
}

fn title_references(title: &str, reference: &str) -> bool {
    let title = title.trim_start();
    let title = title.strip_prefix("PR ").unwrap_or(title);
    title
        .strip_prefix(reference)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

impl std::fmt::Display for RecordKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Url(url) => write!(f, "url={url}"),
            Self::TitleContains(text) => write!(f, "title~{text}"),
            Self::ItemReference(reference) => write!(f, "ref={reference}"),
        }
    }
}

/// Everything needed to create a record, plus the keys to look it up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Lookup keys, tried in order
    pub keys: Vec<RecordKey>,
    /// Record title
    pub title: String,
    /// Record type
    pub record_type: RecordType,
    /// Desired status
    pub status: WorkspaceStatus,
    /// Tags (already filtered through the allow-list)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Body blocks, only written on create
    #[serde(default)]
    pub children: Vec<Block>,
}

/// A record that exists in the workspace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordRef {
    /// Workspace identifier
    pub id: String,
    /// Browser URL of the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Plain-text title, when readable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Current status, when readable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkspaceStatus>,
}

/// Result of an upsert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "record", rename_all = "snake_case")]
pub enum UpsertOutcome {
    /// No match; a new record was created
    Created(RecordRef),
    /// An existing record had its status patched
    Patched(RecordRef),
}

impl UpsertOutcome {
    /// The record that was created or patched
    #[must_use]
    pub const fn record(&self) -> &RecordRef {
        match self {
            Self::Created(r) | Self::Patched(r) => r,
        }
    }
}

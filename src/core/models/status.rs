//! Workspace record status
//!
//! The status a tracked item carries in the workspace database. Transitions
//! are one-way: `대기 → 진행중 → {완료 | 보류}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ItemState;

/// Status label of a workspace record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WorkspaceStatus {
    /// Not started
    #[default]
    #[serde(rename = "대기", alias = "pending")]
    Pending,
    /// Being worked on
    #[serde(rename = "진행중", alias = "in_progress")]
    InProgress,
    /// Finished
    #[serde(rename = "완료", alias = "done")]
    Done,
    /// Put on hold (pull request closed without merge)
    #[serde(rename = "보류", alias = "held")]
    Held,
}

impl WorkspaceStatus {
    /// Label written to the workspace select field
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "대기",
            Self::InProgress => "진행중",
            Self::Done => "완료",
            Self::Held => "보류",
        }
    }

    /// Parse a workspace label; unknown labels yield `None`
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "대기" => Some(Self::Pending),
            "진행중" => Some(Self::InProgress),
            "완료" => Some(Self::Done),
            "보류" => Some(Self::Held),
            _ => None,
        }
    }

    /// Check if no further transition is possible
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Held)
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::InProgress => 1,
            Self::Done | Self::Held => 2,
        }
    }

    /// Apply an observed transition, never moving backwards
    ///
    /// Terminal states are kept as they are.
    #[must_use]
    pub const fn advance(self, next: Self) -> Self {
        if self.is_terminal() || next.rank() < self.rank() {
            self
        } else {
            next
        }
    }
}

impl std::fmt::Display for WorkspaceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lookup table from tracker state to workspace status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMap(BTreeMap<String, WorkspaceStatus>);

impl StatusMap {
    /// Status used for states missing from the table
    pub const FALLBACK: WorkspaceStatus = WorkspaceStatus::InProgress;

    /// Build from `(state, status)` pairs
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (ItemState, WorkspaceStatus)>,
    {
        Self(pairs.into_iter().map(|(state, status)| (state.as_str().to_string(), status)).collect())
    }

    /// Status for a tracker state, falling back to `진행중`
    #[must_use]
    pub fn status_for(&self, state: ItemState) -> WorkspaceStatus {
        self.0.get(state.as_str()).copied().unwrap_or(Self::FALLBACK)
    }
}

impl Default for StatusMap {
    fn default() -> Self {
        Self::from_pairs([
            (ItemState::Open, WorkspaceStatus::InProgress),
            (ItemState::Closed, WorkspaceStatus::Done),
            (ItemState::Merged, WorkspaceStatus::Done),
        ])
    }
}

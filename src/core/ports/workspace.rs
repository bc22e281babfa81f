//! Workspace port
//!
//! Defines the interface to the document workspace holding tracked records.

use async_trait::async_trait;

use crate::Result;
use crate::core::models::{RecordDraft, RecordKey, RecordRef, WorkspaceStatus};

/// A database of records that can be queried, created and patched
#[async_trait]
pub trait Workspace: Send + Sync {
    /// Records matching the key, in the workspace's order
    async fn find(&self, key: &RecordKey) -> Result<Vec<RecordRef>>;

    /// Create a record with full properties and children
    async fn create(&self, draft: &RecordDraft) -> Result<RecordRef>;

    /// Update the status of an existing record; nothing else changes
    async fn patch_status(&self, id: &str, status: WorkspaceStatus) -> Result<RecordRef>;
}

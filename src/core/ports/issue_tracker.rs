//! Issue tracker port
//!
//! Defines the read-only interface to the issue-tracking service.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::Result;
use crate::core::models::ActivityItem;

/// Read access to a repository's issues, pull requests and commits
///
/// Implementations return items in the order the service returns them
/// and fetch a single page only.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Issues and pull requests changed since `since`, in service order
    ///
    /// Pull requests are included and marked by their kind; callers filter.
    async fn list_issues(&self, repo: &str, since: DateTime<Utc>) -> Result<Vec<ActivityItem>>;

    /// Number of open issues (pull requests excluded)
    async fn count_open_issues(&self, repo: &str) -> Result<usize>;

    /// Pull requests updated since `since`, most recently updated first
    async fn list_pull_requests(&self, repo: &str, since: DateTime<Utc>)
    -> Result<Vec<ActivityItem>>;

    /// Number of commits on the default branch since `since`
    async fn count_commits(&self, repo: &str, since: DateTime<Utc>) -> Result<usize>;
}

//! Activity collector - fetches and narrows tracker activity to a window
//!
//! The tracker's `since` parameter only bounds one edge (last update), so
//! the collector asks for everything changed since the window start and
//! narrows client-side.

use serde::Serialize;

use crate::Result;
use crate::core::models::{ActivityItem, ItemKind, ItemState, TimeWindow};
use crate::core::ports::IssueTracker;

/// Activity of one repository within one window
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    /// The window everything was narrowed to
    pub window: TimeWindow,
    /// Issues opened in the window, in tracker order
    pub created: Vec<ActivityItem>,
    /// Issues closed in the window, in tracker order
    pub closed: Vec<ActivityItem>,
    /// Issues open right now
    pub open_count: usize,
    /// Pull requests updated in the window, most recent first
    pub pull_requests: Vec<ActivityItem>,
    /// Commits since the window start
    pub commit_count: usize,
}

impl Activity {
    /// Check if there is nothing to report
    ///
    /// Only issue movement counts; pull requests and commits alone do not
    /// produce a report.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.closed.is_empty()
    }

    /// Pull requests opened in the window
    #[must_use]
    pub fn opened_pull_requests(&self) -> usize {
        self.pull_requests
            .iter()
            .filter(|pr| self.window.contains_opt(pr.created_at))
            .count()
    }

    /// Pull requests merged in the window
    #[must_use]
    pub fn merged_pull_requests(&self) -> usize {
        self.pull_requests
            .iter()
            .filter(|pr| pr.state == ItemState::Merged && self.window.contains_opt(pr.closed_at))
            .count()
    }
}

/// Split issues into those created and those closed within the window
///
/// Pull requests are dropped. Order is preserved; an issue opened and
/// closed inside the window appears in both lists.
#[must_use]
pub fn narrow_issues(
    items: &[ActivityItem],
    window: &TimeWindow,
) -> (Vec<ActivityItem>, Vec<ActivityItem>) {
    let issues = || items.iter().filter(|i| i.kind == ItemKind::Issue);

    let created = issues().filter(|i| window.contains_opt(i.created_at)).cloned().collect();
    let closed = issues().filter(|i| window.contains_opt(i.closed_at)).cloned().collect();

    (created, closed)
}

/// Keep pull requests until the first one last updated before the window
#[must_use]
pub fn narrow_pull_requests(items: Vec<ActivityItem>, window: &TimeWindow) -> Vec<ActivityItem> {
    items
        .into_iter()
        .take_while(|pr| !pr.updated_at.is_some_and(|t| t < window.start))
        .collect()
}

/// Collect all activity of `repo` inside `window`
///
/// Any upstream failure is returned as-is and aborts the run.
pub async fn collect(
    tracker: &dyn IssueTracker,
    repo: &str,
    window: TimeWindow,
) -> Result<Activity> {
    let changed = tracker.list_issues(repo, window.start).await?;
    let (created, closed) = narrow_issues(&changed, &window);
    log::debug!(
        "{} changed item(s), {} created and {} closed in window",
        changed.len(),
        created.len(),
        closed.len()
    );

    let open_count = tracker.count_open_issues(repo).await?;
    let pull_requests =
        narrow_pull_requests(tracker.list_pull_requests(repo, window.start).await?, &window);
    let commit_count = tracker.count_commits(repo, window.start).await?;

    Ok(Activity {
        window,
        created,
        closed,
        open_count,
        pull_requests,
        commit_count,
    })
}

//! Activity collector tests

use repo_pulse::Error;
use repo_pulse::core::models::{ItemState, TimeWindow};
use repo_pulse::core::services::collect;

use crate::common::fixtures::{ItemBuilder, at, now};
use crate::common::mocks::MockTracker;

fn window() -> TimeWindow {
    TimeWindow::ending_at(now(), 24).unwrap()
}

#[tokio::test]
async fn test_collect_narrows_to_window() {
    let mut tracker = MockTracker::with_issues(vec![
        ItemBuilder::issue(1).created(at(2, 9)).build(),
        ItemBuilder::issue(2).created(at(1, 3)).closed(at(2, 1)).build(),
        ItemBuilder::issue(3).created(at(1, 3)).updated(at(2, 2)).build(),
        ItemBuilder::pull(4).created(at(2, 8)).build(),
    ]);
    tracker.open_count = 11;
    tracker.commit_count = 6;

    let activity = collect(&tracker, "octo/repo", window()).await.unwrap();

    assert_eq!(activity.created.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
    assert_eq!(activity.closed.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2]);
    assert_eq!(activity.open_count, 11);
    assert_eq!(activity.commit_count, 6);
    assert!(!activity.is_empty());
}

#[tokio::test]
async fn test_window_bounds_are_inclusive() {
    let w = window();
    let tracker = MockTracker::with_issues(vec![
        ItemBuilder::issue(1).created(w.start).build(),
        ItemBuilder::issue(2).created(w.end).build(),
    ]);

    let activity = collect(&tracker, "octo/repo", w).await.unwrap();
    assert_eq!(activity.created.len(), 2);
}

#[tokio::test]
async fn test_pull_request_counts() {
    let mut tracker = MockTracker::default();
    tracker.pulls = vec![
        ItemBuilder::pull(10).created(at(2, 1)).build(),
        ItemBuilder::pull(11).created(at(1, 1)).state(ItemState::Merged).closed(at(2, 3)).build(),
        ItemBuilder::pull(12).created(at(1, 1)).updated(at(1, 2)).build(),
    ];

    let activity = collect(&tracker, "octo/repo", window()).await.unwrap();
    assert_eq!(activity.pull_requests.len(), 2);
    assert_eq!(activity.opened_pull_requests(), 1);
    assert_eq!(activity.merged_pull_requests(), 1);
    assert!(activity.is_empty(), "pull requests alone do not make a report");
}

#[tokio::test]
async fn test_tracker_failure_is_fatal() {
    let tracker = MockTracker::failing();
    let err = collect(&tracker, "octo/repo", window()).await.unwrap_err();

    assert!(matches!(err, Error::Upstream { status: 500, .. }));
    assert_eq!(tracker.calls(), vec!["list_issues".to_string()]);
}

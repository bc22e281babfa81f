//! Event flow tests: record sync and notification per webhook event

use repo_pulse::core::models::{
    Delivery, ItemState, RecordKey, RecordType, UpsertOutcome, WorkspaceStatus,
};
use repo_pulse::core::services::{item_draft, notify_event, sync_event};

use crate::common::fixtures::{ItemBuilder, config, event};
use crate::common::mocks::{MockNotifier, MockWorkspace};

#[tokio::test]
async fn test_sync_creates_issue_record() {
    let workspace = MockWorkspace::new();
    let item = ItemBuilder::issue(12).title("Login fails").labels(&["bug", "p1"]).body("steps").build();

    let outcome = sync_event(&workspace, &event("opened", item), &config()).await.unwrap();

    assert!(matches!(outcome, UpsertOutcome::Created(_)));
    let records = workspace.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "#12 Login fails");
    assert_eq!(records[0].status, WorkspaceStatus::InProgress);
    assert_eq!(records[0].children, 1);
    assert_eq!(
        workspace.queries(),
        vec![
            RecordKey::Url("https://github.com/octo/repo/issues/12".to_string()),
            RecordKey::ItemReference("#12".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_sync_twice_patches_instead_of_duplicating() {
    let workspace = MockWorkspace::new();
    let item = ItemBuilder::issue(12).build();

    sync_event(&workspace, &event("opened", item.clone()), &config()).await.unwrap();
    let second = sync_event(&workspace, &event("edited", item), &config()).await.unwrap();

    assert!(matches!(second, UpsertOutcome::Patched(_)));
    assert_eq!(workspace.records().len(), 1);
    assert_eq!(workspace.create_count(), 1);
}

#[tokio::test]
async fn test_reopen_does_not_regress_done_record() {
    let workspace = MockWorkspace::new().with_record(
        "#12 Login fails",
        Some("https://github.com/octo/repo/issues/12"),
        WorkspaceStatus::Done,
    );
    let item = ItemBuilder::issue(12).build();

    let outcome = sync_event(&workspace, &event("reopened", item), &config()).await.unwrap();

    assert_eq!(outcome.record().status, Some(WorkspaceStatus::Done));
    assert_eq!(workspace.patches(), vec![("page-1".to_string(), WorkspaceStatus::Done)]);
}

#[tokio::test]
async fn test_unmerged_pull_request_is_held() {
    let workspace = MockWorkspace::new();
    let pr = ItemBuilder::pull(30).title("Try cache").state(ItemState::Closed).build();

    sync_event(&workspace, &event("closed", pr), &config()).await.unwrap();

    let records = workspace.records();
    assert_eq!(records[0].title, "PR #30 Try cache");
    assert_eq!(records[0].status, WorkspaceStatus::Held);
}

#[tokio::test]
async fn test_sync_failure_is_an_error() {
    let workspace = MockWorkspace::failing();
    let item = ItemBuilder::issue(1).build();
    assert!(sync_event(&workspace, &event("opened", item), &config()).await.is_err());
}

#[test]
fn test_item_draft_filters_tags() {
    let item = ItemBuilder::issue(3).labels(&["bug", "wontfix", "docs"]).build();
    let draft = item_draft(&item, WorkspaceStatus::InProgress, &config().tag_allow_list);

    assert_eq!(draft.record_type, RecordType::Issue);
    assert_eq!(draft.tags, vec!["bug".to_string(), "docs".to_string()]);
    assert_eq!(draft.url.as_deref(), Some("https://github.com/octo/repo/issues/3"));
}

#[tokio::test]
async fn test_notify_event_sends_once() {
    let notifier = MockNotifier::new();
    let item = ItemBuilder::issue(12).labels(&["bug"]).build();

    let delivery =
        notify_event(Some(&notifier), &event("opened", item), "octo/repo", &config()).await;

    assert_eq!(delivery, Delivery::Sent);
    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header, "🐛 새 Issue가 생성되었습니다");
}

#[tokio::test]
async fn test_notify_failure_is_a_value() {
    let notifier = MockNotifier::failing();
    let item = ItemBuilder::issue(12).build();

    let delivery =
        notify_event(Some(&notifier), &event("opened", item), "octo/repo", &config()).await;
    assert!(matches!(delivery, Delivery::Failed(_)));
}

#[tokio::test]
async fn test_notify_without_channel_is_skipped() {
    let item = ItemBuilder::issue(12).build();
    let delivery = notify_event(None, &event("opened", item), "octo/repo", &config()).await;
    assert_eq!(delivery, Delivery::Skipped);
}

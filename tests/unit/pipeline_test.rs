//! Report pipeline tests
//!
//! Every external system is a mock; `now()` fixes the 24h window to
//! 2024-05-01 12:00 .. 2024-05-02 12:00 UTC.

use repo_pulse::Error;
use repo_pulse::config::Config;
use repo_pulse::core::models::{
    Delivery, ItemState, NarrativeQuality, UpsertOutcome, WorkspaceStatus,
};
use repo_pulse::core::ports::{NarrativeOracle, Notifier, Workspace};
use repo_pulse::core::services::narrative::FALLBACK_TREND;
use repo_pulse::core::services::{ReportOutcome, ReportPorts, run_report};

use crate::common::fixtures::{ItemBuilder, at, config, now};
use crate::common::mocks::{MockNotifier, MockOracle, MockTracker, MockWorkspace};

const ANSWER: &str = "[TREND]\n버그 위주의 하루.\n[COMMENT]\n로그인 이슈를 먼저 보세요.";

fn busy_tracker() -> MockTracker {
    MockTracker {
        issues: vec![
            ItemBuilder::issue(1).title("Login fails").labels(&["bug"]).created(at(2, 1)).build(),
            ItemBuilder::issue(2).labels(&["urgent"]).created(at(1, 3)).closed(at(2, 2)).build(),
            // Updated in the window but opened and closed long before
            ItemBuilder::issue(3).created(at(1, 0)).updated(at(2, 5)).build(),
        ],
        pulls: vec![ItemBuilder::pull(9).created(at(2, 4)).build()],
        open_count: 5,
        commit_count: 7,
        ..MockTracker::default()
    }
}

fn ports<'a>(
    tracker: &'a MockTracker,
    oracle: Option<&'a MockOracle>,
    workspace: Option<&'a MockWorkspace>,
    notifier: Option<&'a MockNotifier>,
) -> ReportPorts<'a> {
    ReportPorts {
        tracker,
        oracle: oracle.map(|o| o as &dyn NarrativeOracle),
        workspace: workspace.map(|w| w as &dyn Workspace),
        notifier: notifier.map(|n| n as &dyn Notifier),
    }
}

#[tokio::test]
async fn test_empty_window_touches_nothing() {
    let tracker = MockTracker {
        issues: vec![ItemBuilder::issue(1).created(at(1, 2)).build()],
        pulls: vec![ItemBuilder::pull(9).created(at(2, 4)).build()],
        commit_count: 3,
        ..MockTracker::default()
    };
    let oracle = MockOracle::answering(ANSWER);
    let workspace = MockWorkspace::new();
    let notifier = MockNotifier::new();

    let outcome = run_report(
        ports(&tracker, Some(&oracle), Some(&workspace), Some(&notifier)),
        &config(),
        now(),
    )
    .await
    .unwrap();

    let ReportOutcome::NothingToReport { window } = outcome else {
        panic!("expected nothing to report");
    };
    assert_eq!(window.end, now());
    assert!(!workspace.touched());
    assert!(notifier.sent().is_empty());
    assert!(oracle.prompts().is_empty());
}

#[tokio::test]
async fn test_dry_run_assembles_without_publishing() {
    let tracker = busy_tracker();
    let oracle = MockOracle::answering(ANSWER);
    let notifier = MockNotifier::new();

    let outcome =
        run_report(ports(&tracker, Some(&oracle), None, Some(&notifier)), &config(), now())
            .await
            .unwrap();

    let ReportOutcome::DryRun { document, narrative } = outcome else {
        panic!("expected a dry run");
    };
    assert_eq!(document.title, "2024.05.02 일간 보고");
    assert_eq!(narrative.quality, NarrativeQuality::Parsed);
    assert!(document.to_markdown().contains("버그 위주의 하루."));
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_published_report_and_notification() {
    let tracker = busy_tracker();
    let oracle = MockOracle::answering(ANSWER);
    let workspace = MockWorkspace::new();
    let notifier = MockNotifier::new();

    let outcome = run_report(
        ports(&tracker, Some(&oracle), Some(&workspace), Some(&notifier)),
        &config(),
        now(),
    )
    .await
    .unwrap();

    let ReportOutcome::Published {
        document,
        record,
        delivery,
        ..
    } = outcome
    else {
        panic!("expected a published report");
    };

    assert!(matches!(record, UpsertOutcome::Created(_)));
    assert_eq!(delivery, Delivery::Sent);

    let records = workspace.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "2024.05.02 일간 보고");
    assert_eq!(records[0].status, WorkspaceStatus::Done);
    assert_eq!(records[0].children, document.blocks.len());

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].header, "📄 2024.05.02 일간 보고 생성 완료");
    assert!(sent[0].context[0].contains("https://notion.so/page-1"));

    // Issue 3 was neither opened nor closed in the window
    let md = document.to_markdown();
    assert!(md.contains("#1 - Login fails"));
    assert!(md.contains("#2 - issue 2"));
    assert!(!md.contains("#3 - "));
}

#[tokio::test]
async fn test_rerun_patches_the_same_report() {
    let tracker = busy_tracker();
    let oracle = MockOracle::answering(ANSWER);
    let workspace = MockWorkspace::new();

    for _ in 0..2 {
        run_report(ports(&tracker, Some(&oracle), Some(&workspace), None), &config(), now())
            .await
            .unwrap();
    }

    assert_eq!(workspace.records().len(), 1);
    assert_eq!(workspace.create_count(), 1);
    assert_eq!(workspace.patches(), vec![("page-1".to_string(), WorkspaceStatus::Done)]);
}

#[tokio::test]
async fn test_answer_without_markers_still_publishes() {
    let tracker = busy_tracker();
    let oracle = MockOracle::answering("그냥 평범한 답변");
    let workspace = MockWorkspace::new();

    let outcome =
        run_report(ports(&tracker, Some(&oracle), Some(&workspace), None), &config(), now())
            .await
            .unwrap();

    let ReportOutcome::Published { narrative, delivery, .. } = outcome else {
        panic!("expected a published report");
    };
    assert_eq!(narrative.quality, NarrativeQuality::Truncated);
    assert_eq!(narrative.trend, "그냥 평범한 답변");
    assert_eq!(delivery, Delivery::Skipped);
    assert_eq!(workspace.create_count(), 1);
}

#[tokio::test]
async fn test_oracle_failure_uses_fallback() {
    let tracker = busy_tracker();
    let oracle = MockOracle::failing();
    let workspace = MockWorkspace::new();

    let outcome =
        run_report(ports(&tracker, Some(&oracle), Some(&workspace), None), &config(), now())
            .await
            .unwrap();

    let ReportOutcome::Published { narrative, .. } = outcome else {
        panic!("expected a published report");
    };
    assert!(matches!(narrative.quality, NarrativeQuality::Fallback(_)));
    assert_eq!(narrative.trend, FALLBACK_TREND);
    assert_eq!(workspace.records().len(), 1);
}

#[tokio::test]
async fn test_missing_oracle_uses_fallback() {
    let tracker = busy_tracker();

    let outcome = run_report(ports(&tracker, None, None, None), &config(), now()).await.unwrap();

    let ReportOutcome::DryRun { narrative, .. } = outcome else {
        panic!("expected a dry run");
    };
    assert!(narrative.is_degraded());
}

#[tokio::test]
async fn test_notification_failure_is_not_fatal() {
    let tracker = busy_tracker();
    let workspace = MockWorkspace::new();
    let notifier = MockNotifier::failing();

    let outcome =
        run_report(ports(&tracker, None, Some(&workspace), Some(&notifier)), &config(), now())
            .await
            .unwrap();

    let ReportOutcome::Published { delivery, .. } = outcome else {
        panic!("expected a published report");
    };
    assert!(matches!(delivery, Delivery::Failed(_)));
    assert_eq!(workspace.records().len(), 1);
}

#[tokio::test]
async fn test_tracker_failure_aborts() {
    let tracker = MockTracker::failing();
    let workspace = MockWorkspace::new();

    let err = run_report(ports(&tracker, None, Some(&workspace), None), &config(), now())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Upstream { status: 500, .. }));
    assert_eq!(tracker.calls(), vec!["list_issues".to_string()]);
    assert!(!workspace.touched());
}

#[tokio::test]
async fn test_workspace_failure_aborts() {
    let tracker = busy_tracker();
    let workspace = MockWorkspace::failing();
    let notifier = MockNotifier::new();

    let result =
        run_report(ports(&tracker, None, Some(&workspace), Some(&notifier)), &config(), now())
            .await;

    assert!(result.is_err());
    assert!(notifier.sent().is_empty());
}

#[tokio::test]
async fn test_missing_repository_is_a_config_error() {
    let tracker = busy_tracker();

    let err = run_report(ports(&tracker, None, None, None), &Config::default(), now())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(tracker.calls().is_empty());
}

#[tokio::test]
async fn test_merged_pull_requests_do_not_trigger_a_report_alone() {
    let tracker = MockTracker {
        pulls: vec![
            ItemBuilder::pull(9)
                .state(ItemState::Merged)
                .created(at(2, 1))
                .closed(at(2, 3))
                .build(),
        ],
        ..MockTracker::default()
    };

    let outcome = run_report(ports(&tracker, None, None, None), &config(), now()).await.unwrap();
    assert!(matches!(outcome, ReportOutcome::NothingToReport { .. }));
}

#[tokio::test]
async fn test_oversized_window_is_a_config_error() {
    let tracker = busy_tracker();
    let config = Config {
        window_hours: u32::MAX,
        ..config()
    };

    let err = run_report(ports(&tracker, None, None, None), &config, now()).await.unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(tracker.calls().is_empty());
}

//! Notification builders
//!
//! Turn reports and tracker events into channel-neutral [`Notification`]s.
//! Values may contain Slack link markup (`<url|text>`); free text goes into
//! `body` and is sanitized by the adapter.

use crate::config::UserDirectory;
use crate::core::models::{Field, ItemKind, ItemState, Narrative, Notification, SourceEvent};
use crate::text::{slack_link, truncate_chars};

use super::collector::Activity;

/// Longest body quoted in a notification
pub const BODY_PREVIEW: usize = 500;

/// Emoji for an issue, by the first matching label family
#[must_use]
pub fn label_emoji(labels: &[String]) -> &'static str {
    let has = |names: &[&str]| labels.iter().any(|l| names.contains(&l.as_str()));

    if has(&["bug", "fix"]) {
        "🐛"
    } else if has(&["enhancement", "feature"]) {
        "✨"
    } else if has(&["documentation", "docs"]) {
        "📝"
    } else if has(&["refactor"]) {
        "🔧"
    } else if has(&["data", "csvs"]) {
        "📊"
    } else if has(&["meeting"]) {
        "📅"
    } else if has(&["feature-request"]) {
        "💡"
    } else {
        "📝"
    }
}

/// Accent colour for an issue, by the most urgent priority label
///
/// Labels are matched by substring, case-insensitively (`Priority: High`
/// counts as high).
#[must_use]
pub fn priority_color(labels: &[String]) -> &'static str {
    let lowered: Vec<String> = labels.iter().map(|l| l.to_lowercase()).collect();
    let has = |needle: &str| lowered.iter().any(|l| l.contains(needle));

    if has("critical") {
        "#d73a4a"
    } else if has("high") {
        "#fbca04"
    } else if has("medium") {
        "#0075ca"
    } else if has("low") {
        "#7cfc00"
    } else {
        "#808080"
    }
}

/// Header text for an event
#[must_use]
pub fn action_text(event: &SourceEvent) -> String {
    let action = event.action.as_str();
    match event.item.kind {
        ItemKind::Issue => match action {
            "opened" => "새 Issue가 생성되었습니다".to_string(),
            "closed" => "Issue가 닫혔습니다".to_string(),
            "reopened" => "Issue가 다시 열렸습니다".to_string(),
            "assigned" => "Issue에 담당자가 할당되었습니다".to_string(),
            "labeled" => "Issue에 레이블이 추가되었습니다".to_string(),
            other => format!("Issue가 {other}되었습니다"),
        },
        ItemKind::PullRequest if event.is_merged() => "Pull Request가 머지되었습니다".to_string(),
        ItemKind::PullRequest => match action {
            "opened" => "새 Pull Request가 생성되었습니다".to_string(),
            "closed" => "Pull Request가 닫혔습니다".to_string(),
            "reopened" => "Pull Request가 다시 열렸습니다".to_string(),
            "ready_for_review" => "Pull Request가 리뷰 대기 중입니다".to_string(),
            other => format!("Pull Request가 {other}되었습니다"),
        },
    }
}

fn pull_request_emoji(event: &SourceEvent) -> &'static str {
    if event.is_merged() {
        "✅"
    } else if event.action == "closed" {
        "❌"
    } else {
        "🔀"
    }
}

fn pull_request_color(event: &SourceEvent) -> &'static str {
    if event.is_merged() {
        "#6f42c1"
    } else if event.pull.as_ref().is_some_and(|p| p.draft) {
        "#808080"
    } else if event.action == "closed" {
        "#d73a4a"
    } else {
        "#0075ca"
    }
}

fn pull_request_state(event: &SourceEvent) -> &'static str {
    if event.is_merged() {
        "🟢 머지됨"
    } else if event.item.state == ItemState::Open {
        "🟡 대기 중"
    } else {
        "🔴 닫힘"
    }
}

/// Author as `name (mention)` when a display name is mapped, else the mention
fn author_text(users: &UserDirectory, login: &str) -> String {
    let mention = users.mention(login);
    match users.display_name(login) {
        name if name == login => mention,
        name => format!("{name} ({mention})"),
    }
}

/// Notification for a single tracker event
#[must_use]
pub fn event_notification(event: &SourceEvent, repo: &str, users: &UserDirectory) -> Notification {
    let item = &event.item;
    let link = slack_link(&item.url, &format!("{} {}", item.reference(), item.title));
    let author = author_text(users, &event.author);

    let mut fields = Vec::new();
    let (emoji, accent) = match item.kind {
        ItemKind::Issue => {
            fields.push(Field::new("Issue", link));
            fields.push(Field::new("작성자", author));

            let assignees = if item.assignees.is_empty() {
                "미할당".to_string()
            } else {
                item.assignees.iter().map(|a| users.mention(a)).collect::<Vec<_>>().join(", ")
            };
            fields.push(Field::new("담당자", assignees));

            let labels =
                if item.labels.is_empty() { "없음".to_string() } else { item.labels.join(", ") };
            fields.push(Field::new("레이블", labels));

            (label_emoji(&item.labels), priority_color(&item.labels))
        },
        ItemKind::PullRequest => {
            fields.push(Field::new("PR", link));
            fields.push(Field::new("작성자", author));
            if let Some(pull) = &event.pull {
                fields.push(Field::new("브랜치", format!("`{}` → `{}`", pull.head, pull.base)));
            }
            fields.push(Field::new("상태", pull_request_state(event)));

            (pull_request_emoji(event), pull_request_color(event))
        },
    };

    let body = item
        .body
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map_or_else(|| "설명 없음".to_string(), |b| truncate_chars(b, BODY_PREVIEW));

    Notification {
        header: format!("{emoji} {}", action_text(event)),
        fields,
        body: Some(body),
        accent: Some(accent.to_string()),
        context: vec![format!("📌 Repository: {repo}")],
    }
}

/// Condensed notification for a published report
#[must_use]
pub fn report_notification(
    title: &str,
    activity: &Activity,
    narrative: &Narrative,
    record_url: Option<&str>,
) -> Notification {
    let fields = vec![
        Field::new("신규 Issue", format!("{}건", activity.created.len())),
        Field::new("완료 Issue", format!("{}건", activity.closed.len())),
        Field::new("진행중 Issue", format!("{}건", activity.open_count)),
        Field::new(
            "PR",
            format!(
                "{}건 생성 / {}건 머지",
                activity.opened_pull_requests(),
                activity.merged_pull_requests()
            ),
        ),
        Field::new("Commits", format!("{}개", activity.commit_count)),
    ];

    let context = record_url.map_or_else(
        || "📁 전체 보고서는 Notion에서 확인하세요.".to_string(),
        |url| format!("📁 전체 보고서는 Notion에서 확인하세요: <{url}|보고서 열기>"),
    );

    Notification {
        header: format!("📄 {title} 생성 완료"),
        fields,
        body: Some(truncate_chars(&narrative.trend, BODY_PREVIEW)),
        accent: None,
        context: vec![context],
    }
}

//! Report assembler - renders triaged activity into a document
//!
//! Pure: takes already collected items and an already obtained narrative,
//! returns blocks. Never called when there is nothing to report.

use crate::core::models::{ActivityItem, Block, HeadingLevel, Narrative, ReportDocument};

use super::classifier::{SeverityBuckets, triage_items};

/// Heading of the counts section
pub const SUMMARY_HEADING: &str = "Summary";

/// Heading of the trend paragraph
pub const TREND_HEADING: &str = "Trend Analysis";

/// Heading of the comment paragraph
pub const COMMENT_HEADING: &str = "Comment";

/// Annotation for items nobody is assigned to
pub const NO_ASSIGNEE: &str = "[담당자 없음]";

/// Title of the report for a given date label, e.g. `2024.05.01 일간 보고`
#[must_use]
pub fn report_title(date: &str) -> String {
    format!("{date} 일간 보고")
}

/// Trailing annotation listing assignees
#[must_use]
pub fn assignee_annotation(assignees: &[String]) -> String {
    if assignees.is_empty() {
        NO_ASSIGNEE.to_string()
    } else {
        let mentions: Vec<String> = assignees.iter().map(|a| format!("@{a}")).collect();
        format!("[담당: {}]", mentions.join(", "))
    }
}

/// Numbered entry for one item: `#<id> - <title>` linked to the item
#[must_use]
pub fn item_entry(item: &ActivityItem) -> Block {
    Block::numbered(
        format!("{} - {}", item.reference(), item.title),
        Some(item.url.clone()),
        Some(assignee_annotation(&item.assignees)),
    )
}

/// Assemble the report document
///
/// Layout, in order:
/// 1. divider, summary heading, one bullet per count
/// 2. one heading plus numbered entries per non-empty severity tier
///    (critical, major, normal), items in collector order
/// 3. trend heading and paragraph, comment heading and paragraph
#[must_use]
pub fn assemble(
    title: &str,
    created: &[ActivityItem],
    closed: &[ActivityItem],
    open_count: usize,
    narrative: &Narrative,
) -> ReportDocument {
    let mut doc = ReportDocument::new(title);

    doc.push(Block::Divider);
    doc.push(Block::heading(HeadingLevel::H2, SUMMARY_HEADING));
    doc.push(Block::bullet(format!("신규 이슈: {}건", created.len())));
    doc.push(Block::bullet(format!("완료 이슈: {}건", closed.len())));
    doc.push(Block::bullet(format!("진행중 이슈: {open_count}건")));

    let triaged = triage_items(created, closed);
    let buckets = SeverityBuckets::from_items(&triaged);
    for (severity, items) in buckets.non_empty() {
        doc.push(Block::heading(HeadingLevel::H3, severity.heading()));
        doc.blocks.extend(items.iter().map(item_entry));
    }

    doc.push(Block::heading(HeadingLevel::H2, TREND_HEADING));
    doc.push(Block::paragraph(narrative.trend.clone()));
    doc.push(Block::heading(HeadingLevel::H2, COMMENT_HEADING));
    doc.push(Block::paragraph(narrative.comment.clone()));

    doc
}

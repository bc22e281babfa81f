//! Publisher service - record upsert and best-effort notification
//!
//! Upsert is keyed: the first lookup key with any match wins and only the
//! first match is touched, so repeated runs never duplicate records.
//! Notification failures are values, never errors.

use crate::Result;
use crate::core::models::{
    ActivityItem, Block, Delivery, ItemKind, Notification, RecordDraft, RecordKey, RecordType,
    ReportDocument, UpsertOutcome, WorkspaceStatus,
};
use crate::core::ports::{Notifier, Workspace};

/// Create the record if no key matches, else patch the first match's status
///
/// The patched status never moves backwards from what the record already
/// carries (see [`WorkspaceStatus::advance`]).
pub async fn upsert(workspace: &dyn Workspace, draft: &RecordDraft) -> Result<UpsertOutcome> {
    for key in &draft.keys {
        let found = workspace.find(key).await?;
        let total = found.len();
        let matches: Vec<_> = found.into_iter().filter(|r| key.accepts(r)).collect();
        if matches.len() < total {
            log::debug!("Ignoring {} near match(es) for {key}", total - matches.len());
        }
        let Some(first) = matches.first() else {
            continue;
        };

        if matches.len() > 1 {
            log::warn!("{} records match {key}; patching the first one only", matches.len());
        }

        let status = first.status.map_or(draft.status, |current| current.advance(draft.status));
        log::debug!("Patching record {} ({key}) to {status}", first.id);
        let patched = workspace.patch_status(&first.id, status).await?;
        return Ok(UpsertOutcome::Patched(patched));
    }

    log::debug!("No record matches '{}'; creating", draft.title);
    let created = workspace.create(draft).await?;
    Ok(UpsertOutcome::Created(created))
}

/// Post a notification, turning any failure into [`Delivery::Failed`]
///
/// `None` means no channel is configured and yields [`Delivery::Skipped`].
pub async fn notify(notifier: Option<&dyn Notifier>, notification: &Notification) -> Delivery {
    let Some(notifier) = notifier else {
        return Delivery::Skipped;
    };

    match notifier.post(notification).await {
        Ok(()) => Delivery::Sent,
        Err(e) => Delivery::Failed(e.to_string()),
    }
}

/// Labels that appear in the allow-list, in label order
#[must_use]
pub fn allowed_tags(labels: &[String], allow_list: &[String]) -> Vec<String> {
    labels.iter().filter(|l| allow_list.contains(l)).cloned().collect()
}

/// Record title for a tracked item: `#42 title` or `PR #42 title`
#[must_use]
pub fn item_title(item: &ActivityItem) -> String {
    match item.kind {
        ItemKind::Issue => format!("{} {}", item.reference(), item.title),
        ItemKind::PullRequest => format!("PR {} {}", item.reference(), item.title),
    }
}

/// Draft for a tracked issue or pull request
///
/// Looked up by URL first, then by a title opening with `#<id>` or `PR #<id>`.
#[must_use]
pub fn item_draft(item: &ActivityItem, status: WorkspaceStatus, allow_list: &[String]) -> RecordDraft {
    let record_type = match item.kind {
        ItemKind::Issue => RecordType::Issue,
        ItemKind::PullRequest => RecordType::PullRequest,
    };

    let children = item
        .body
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(|b| vec![Block::paragraph(b)])
        .unwrap_or_default();

    RecordDraft {
        keys: vec![
            RecordKey::Url(item.url.clone()),
            RecordKey::ItemReference(item.reference()),
        ],
        title: item_title(item),
        record_type,
        status,
        tags: allowed_tags(&item.labels, allow_list),
        url: Some(item.url.clone()),
        children,
    }
}

/// Draft for a generated report, looked up by its title
#[must_use]
pub fn report_draft(doc: &ReportDocument) -> RecordDraft {
    RecordDraft {
        keys: vec![RecordKey::TitleContains(doc.title.clone())],
        title: doc.title.clone(),
        record_type: RecordType::Report,
        status: WorkspaceStatus::Done,
        tags: Vec::new(),
        url: None,
        children: doc.blocks.clone(),
    }
}

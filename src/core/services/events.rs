//! Event flows - record sync and notification for a single tracker event

use crate::Result;
use crate::config::Config;
use crate::core::models::{Delivery, SourceEvent, StatusMap, UpsertOutcome, WorkspaceStatus};
use crate::core::ports::{Notifier, Workspace};

use super::messages::event_notification;
use super::publisher::{item_draft, notify, upsert};

/// Workspace status an event asks for
///
/// Event triggers win over the state table: `assigned` means work has
/// started and a pull request closed without merge is put on hold.
#[must_use]
pub fn event_status(event: &SourceEvent, map: &StatusMap) -> WorkspaceStatus {
    if event.action == "assigned" {
        return WorkspaceStatus::InProgress;
    }
    if event.is_pull_request() && event.action == "closed" && !event.is_merged() {
        return WorkspaceStatus::Held;
    }
    map.status_for(event.item.state)
}

/// Upsert the record tracking the event's item
pub async fn sync_event(
    workspace: &dyn Workspace,
    event: &SourceEvent,
    config: &Config,
) -> Result<UpsertOutcome> {
    let status = event_status(event, &config.status_map);
    log::debug!("{} {} ({}) maps to {status}", event.item.kind, event.item.reference(), event.action);

    let draft = item_draft(&event.item, status, &config.tag_allow_list);
    upsert(workspace, &draft).await
}

/// Post the event notification; never fails
pub async fn notify_event(
    notifier: Option<&dyn Notifier>,
    event: &SourceEvent,
    repo: &str,
    config: &Config,
) -> Delivery {
    let notification = event_notification(event, repo, &config.users);
    let delivery = notify(notifier, &notification).await;
    if let Delivery::Failed(reason) = &delivery {
        log::warn!("Notification for {} not delivered: {reason}", event.item.reference());
    }
    delivery
}

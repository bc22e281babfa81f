//! Sync a webhook event into the Notion database

use std::path::Path;

use anyhow::Context;

use repo_pulse::adapters::NotionWorkspace;
use repo_pulse::adapters::github::load_event;
use repo_pulse::config::Config;
use repo_pulse::core::services::{event_status, sync_event};
use repo_pulse::output::{OutputMode, SyncResult};

/// Upsert the record of the event's issue or pull request
pub async fn sync(
    config: &Config,
    event_path: &Path,
    action: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let event = load_event(event_path, action)
        .with_context(|| format!("Failed to read event from {}", event_path.display()))?;
    let workspace = NotionWorkspace::new(config)?;

    let record = sync_event(&workspace, &event, config)
        .await
        .with_context(|| format!("Failed to sync {}", event.item.reference()))?;

    let requested = event_status(&event, &config.status_map);
    SyncResult::new(event.item.reference(), event.action, requested, record).render(mode);
    Ok(())
}

//! Post a Slack notification for a webhook event

use std::path::Path;

use anyhow::Context;

use repo_pulse::adapters::SlackNotifier;
use repo_pulse::adapters::github::load_event;
use repo_pulse::config::Config;
use repo_pulse::core::services::notify_event;
use repo_pulse::output::{NotifyResult, OutputMode};

use super::notifier_port;

/// Notify the channel about an event; delivery failures do not fail the command
pub async fn notify(
    config: &Config,
    event_path: &Path,
    action: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let event = load_event(event_path, action)
        .with_context(|| format!("Failed to read event from {}", event_path.display()))?;
    let repository = config.require_repository()?;
    let notifier = config.slack.webhook_url.as_deref().map(SlackNotifier::new).transpose()?;

    let delivery = notify_event(notifier.as_ref().map(notifier_port), &event, repository, config).await;

    NotifyResult {
        item: event.item.reference(),
        action: event.action,
        delivery,
    }
    .render(mode);
    Ok(())
}

//! Build and publish the activity report

use anyhow::Context;
use chrono::Utc;

use repo_pulse::adapters::{GeminiOracle, GitHubTracker, NotionWorkspace, SlackNotifier};
use repo_pulse::config::Config;
use repo_pulse::core::ports::{NarrativeOracle, Workspace};
use repo_pulse::core::services::{ReportPorts, run_report};
use repo_pulse::output::{OutputMode, ReportRunResult};

use super::notifier_port;

fn oracle_port(oracle: &GeminiOracle) -> &dyn NarrativeOracle {
    oracle
}

fn workspace_port(workspace: &NotionWorkspace) -> &dyn Workspace {
    workspace
}

/// Run the report pipeline for the configured repository
///
/// A dry run needs no Notion or Slack settings and publishes nothing.
pub async fn report(config: &Config, dry_run: bool, mode: OutputMode) -> anyhow::Result<()> {
    let repository = config.require_repository()?.to_string();

    let tracker = GitHubTracker::new(&config.github)?;
    let oracle = config
        .oracle
        .api_key
        .as_deref()
        .map(|key| GeminiOracle::new(&config.oracle, key))
        .transpose()?;

    let (workspace, notifier) = if dry_run {
        (None, None)
    } else {
        let workspace = NotionWorkspace::new(config)?;
        let notifier = config.slack.webhook_url.as_deref().map(SlackNotifier::new).transpose()?;
        (Some(workspace), notifier)
    };

    let ports = ReportPorts {
        tracker: &tracker,
        oracle: oracle.as_ref().map(oracle_port),
        workspace: workspace.as_ref().map(workspace_port),
        notifier: notifier.as_ref().map(notifier_port),
    };

    let outcome = run_report(ports, config, Utc::now())
        .await
        .with_context(|| format!("Report for {repository} failed"))?;

    ReportRunResult {
        repository,
        outcome,
    }
    .render(mode);
    Ok(())
}

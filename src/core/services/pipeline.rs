//! Report pipeline
//!
//! Collector → Classifier → Assembler ⇄ Narrative → Publisher, run once in
//! sequence. Fatal errors propagate; degraded results are logged here, once.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::Result;
use crate::config::Config;
use crate::core::models::{
    Delivery, Narrative, NarrativeQuality, ReportDocument, TimeWindow, UpsertOutcome,
};
use crate::core::ports::{IssueTracker, NarrativeOracle, Notifier, Workspace};

use super::assembler::{assemble, report_title};
use super::classifier::{SeverityBuckets, triage_items};
use super::collector::{Activity, collect};
use super::messages::report_notification;
use super::narrative::{build_digest, fallback_narrative, summarize};
use super::publisher::{notify, report_draft, upsert};

/// External systems the report pipeline talks to
///
/// Without a workspace the run stops after assembly (dry run). Without an
/// oracle the fallback narrative is used. Without a notifier delivery is
/// skipped.
#[derive(Clone, Copy)]
pub struct ReportPorts<'a> {
    /// Issue tracker to collect from
    pub tracker: &'a dyn IssueTracker,
    /// Summarization oracle
    pub oracle: Option<&'a dyn NarrativeOracle>,
    /// Workspace to publish to
    pub workspace: Option<&'a dyn Workspace>,
    /// Chat channel
    pub notifier: Option<&'a dyn Notifier>,
}

impl std::fmt::Debug for ReportPorts<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportPorts")
            .field("oracle", &self.oracle.is_some())
            .field("workspace", &self.workspace.is_some())
            .field("notifier", &self.notifier.is_some())
            .finish_non_exhaustive()
    }
}

/// What a report run did
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ReportOutcome {
    /// No issue was opened or closed in the window
    NothingToReport {
        /// The empty window
        window: TimeWindow,
    },
    /// Assembled but not published
    DryRun {
        /// The assembled report
        document: ReportDocument,
        /// Narrative used in the report
        narrative: Narrative,
    },
    /// Upserted and announced
    Published {
        /// The published report
        document: ReportDocument,
        /// Narrative used in the report
        narrative: Narrative,
        /// Record created or patched
        record: UpsertOutcome,
        /// Notification result
        delivery: Delivery,
    },
}

/// Run the daily report for the configured repository
///
/// `now` ends the window. Returns early with
/// [`ReportOutcome::NothingToReport`] before the assembler or publisher
/// are touched when no issue moved.
pub async fn run_report(
    ports: ReportPorts<'_>,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<ReportOutcome> {
    let repo = config.require_repository()?;
    let window = TimeWindow::ending_at(now, config.window_hours)?;
    log::info!("Collecting activity of {repo} for {window}");

    let activity = collect(ports.tracker, repo, window).await?;
    if activity.is_empty() {
        log::info!("No issue was opened or closed in the window; nothing to report");
        return Ok(ReportOutcome::NothingToReport { window });
    }

    let narrative = narrate(ports.oracle, repo, &activity).await;
    let title = report_title(&window.report_date(config.utc_offset_hours));
    let document =
        assemble(&title, &activity.created, &activity.closed, activity.open_count, &narrative);

    let Some(workspace) = ports.workspace else {
        log::info!("Dry run: report '{title}' assembled, not published");
        return Ok(ReportOutcome::DryRun {
            document,
            narrative,
        });
    };

    let record = upsert(workspace, &report_draft(&document)).await?;
    log::info!("Report '{title}' published ({})", record.record().id);

    let notification =
        report_notification(&title, &activity, &narrative, record.record().url.as_deref());
    let delivery = notify(ports.notifier, &notification).await;
    match &delivery {
        Delivery::Failed(reason) => log::warn!("Report notification not delivered: {reason}"),
        Delivery::Skipped => log::info!("No chat channel configured; notification skipped"),
        Delivery::Sent => log::debug!("Report notification sent"),
    }

    Ok(ReportOutcome::Published {
        document,
        narrative,
        record,
        delivery,
    })
}

async fn narrate(
    oracle: Option<&dyn NarrativeOracle>,
    repo: &str,
    activity: &Activity,
) -> Narrative {
    let Some(oracle) = oracle else {
        log::warn!("No summarization oracle configured; using fallback narrative");
        return fallback_narrative("oracle is not configured");
    };

    let buckets = SeverityBuckets::from_items(&triage_items(&activity.created, &activity.closed));
    let narrative = summarize(oracle, &build_digest(repo, activity, &buckets)).await;
    match &narrative.quality {
        NarrativeQuality::Parsed => {},
        NarrativeQuality::Truncated => {
            log::warn!("Oracle answer had no section markers; trend truncated");
        },
        NarrativeQuality::Fallback(reason) => {
            log::warn!("Oracle unavailable, using fallback narrative: {reason}");
        },
    }
    narrative
}

//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{Delivery, NarrativeQuality, UpsertOutcome, WorkspaceStatus};
use crate::core::services::ReportOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn upsert_line(outcome: &UpsertOutcome) -> String {
    let record = outcome.record();
    let verb = match outcome {
        UpsertOutcome::Created(_) => "Created",
        UpsertOutcome::Patched(_) => "Updated",
    };
    match &record.url {
        Some(url) => format!("{verb} record {} ({url})", record.id),
        None => format!("{verb} record {}", record.id),
    }
}

fn delivery_line(delivery: &Delivery) -> String {
    match delivery {
        Delivery::Sent => format!("Notification: {}", "sent".green()),
        Delivery::Skipped => format!("Notification: {}", "skipped (no webhook)".dimmed()),
        Delivery::Failed(reason) => format!("Notification: {} ({reason})", "failed".yellow()),
    }
}

/// Result of a `report` run
#[derive(Debug, Serialize)]
pub struct ReportRunResult {
    /// Repository reported on
    pub repository: String,
    /// What happened
    pub outcome: ReportOutcome,
}

impl ReportRunResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => print_json(self),
        }
    }

    fn render_human(&self) {
        match &self.outcome {
            ReportOutcome::NothingToReport { window } => {
                println!("{}: nothing to report for {window}", self.repository);
            },
            ReportOutcome::DryRun {
                document,
                narrative,
            } => {
                println!("{}", document.to_markdown());
                if narrative.is_degraded() {
                    println!("{}", "Narrative is degraded (fallback or truncated).".yellow());
                }
                println!("{}", "Dry run: nothing was published.".dimmed());
            },
            ReportOutcome::Published {
                document,
                narrative,
                record,
                delivery,
            } => {
                println!("{} {}", "Published".green().bold(), document.title);
                println!("{}", upsert_line(record));
                if let NarrativeQuality::Fallback(reason) = &narrative.quality {
                    println!("Narrative: {} ({reason})", "fallback".yellow());
                } else if narrative.quality == NarrativeQuality::Truncated {
                    println!("Narrative: {}", "truncated".yellow());
                }
                println!("{}", delivery_line(delivery));
            },
        }
    }
}

/// Result of a `sync` run
#[derive(Debug, Serialize)]
pub struct SyncResult {
    /// Item reference, e.g. `#42`
    pub item: String,
    /// Event action
    pub action: String,
    /// Status the record holds after the upsert
    pub status: WorkspaceStatus,
    /// Record created or patched
    pub record: UpsertOutcome,
}

impl SyncResult {
    /// Build from the upsert outcome
    ///
    /// The status is the one the record reports back, which differs from
    /// `requested` when an existing record refused to regress. `requested`
    /// is used only when the workspace did not return a status.
    #[must_use]
    pub fn new(item: String, action: String, requested: WorkspaceStatus, record: UpsertOutcome) -> Self {
        let status = record.record().status.unwrap_or(requested);
        Self {
            item,
            action,
            status,
            record,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} {} ({}) -> {}", "Synced".green().bold(), self.item, self.action, self.status);
                println!("{}", upsert_line(&self.record));
            },
            OutputMode::Json => print_json(self),
        }
    }
}

/// Result of a `notify` run
#[derive(Debug, Serialize)]
pub struct NotifyResult {
    /// Item reference, e.g. `#42`
    pub item: String,
    /// Event action
    pub action: String,
    /// Delivery outcome
    pub delivery: Delivery,
}

impl NotifyResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                println!("{} ({}): {}", self.item, self.action, delivery_line(&self.delivery));
            },
            OutputMode::Json => print_json(self),
        }
    }
}

//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use super::commands;
use repo_pulse::config::Config;
use repo_pulse::output::OutputMode;

/// repo-pulse - GitHub activity reports for Notion and Slack
#[derive(Parser, Debug)]
#[command(
    name = "repo-pulse",
    version,
    about = "GitHub activity reports for Notion and Slack",
    long_about = "Triage GitHub issues by severity and publish daily reports.\n\n\
                  `report` collects the last window of activity, adds a generated\n\
                  narrative and upserts the report into Notion, then posts to Slack.\n\
                  `sync` and `notify` handle single issue and pull request events."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ./.repo-pulse.toml, then the user config dir)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build and publish the activity report for the last window
    Report {
        /// Window length in hours (overrides the config)
        #[arg(long, value_name = "N")]
        hours: Option<u32>,

        /// Print the report instead of publishing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Upsert the Notion record of an issue or pull request event
    Sync {
        #[command(flatten)]
        event: EventArgs,
    },

    /// Post a Slack notification for an issue or pull request event
    Notify {
        #[command(flatten)]
        event: EventArgs,
    },

    /// Show version
    Version,
}

/// Where to read a webhook event from
#[derive(clap::Args, Debug)]
pub struct EventArgs {
    /// Webhook payload file
    #[arg(long, env = "GITHUB_EVENT_PATH", value_name = "PATH")]
    pub event: PathBuf,

    /// Event action (defaults to the payload's `action`)
    #[arg(long, env = "EVENT_ACTION")]
    pub action: Option<String>,
}

/// Run the CLI
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let load = || Config::load(cli.config.as_deref()).context("Failed to load configuration");

    match cli.command {
        Some(Command::Report { hours, dry_run }) => {
            let mut config = load()?;
            if let Some(hours) = hours {
                config.window_hours = hours;
            }
            commands::report(&config, dry_run, output_mode).await
        },
        Some(Command::Sync { ref event }) => {
            commands::sync(&load()?, &event.event, event.action.as_deref(), output_mode).await
        },
        Some(Command::Notify { ref event }) => {
            commands::notify(&load()?, &event.event, event.action.as_deref(), output_mode).await
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": repo_pulse::VERSION
                    })
                );
            } else {
                println!("repo-pulse v{}", repo_pulse::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": repo_pulse::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("repo-pulse v{}", repo_pulse::VERSION);
                println!("\nRun 'repo-pulse --help' for usage");
                println!("Run 'repo-pulse report --dry-run' to preview a report");
            }
            Ok(())
        },
    }
}

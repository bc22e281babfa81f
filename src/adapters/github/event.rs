//! Webhook event payloads
//!
//! Reads the JSON GitHub Actions exposes at `GITHUB_EVENT_PATH` for
//! `issues` and `pull_request` triggers.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::models::SourceEvent;
use crate::{Error, Result};

use super::wire::GhIssue;

#[derive(Debug, Deserialize)]
struct Payload {
    #[serde(default)]
    action: Option<String>,
    #[serde(default)]
    issue: Option<GhIssue>,
    #[serde(default)]
    pull_request: Option<GhIssue>,
}

/// Parse a webhook payload
///
/// `action` overrides the payload's own `action` field when given and
/// non-empty.
pub fn parse_event(payload: &str, action: Option<&str>) -> Result<SourceEvent> {
    let payload: Payload = serde_json::from_str(payload).map_err(|e| Error::Event(e.to_string()))?;

    let action = action
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .map(String::from)
        .or(payload.action)
        .ok_or_else(|| Error::Event("no action given and payload has none".to_string()))?;

    let source = payload
        .pull_request
        .or(payload.issue)
        .ok_or_else(|| Error::Event("payload has neither an issue nor a pull request".to_string()))?;

    let author = source.author().unwrap_or("unknown").to_string();
    let pull = source.pull_details();
    let item = source.into_item();

    Ok(SourceEvent {
        action,
        item,
        author,
        pull,
    })
}

/// Read and parse a webhook payload file
pub fn load_event(path: &Path, action: Option<&str>) -> Result<SourceEvent> {
    let payload = fs::read_to_string(path)?;
    parse_event(&payload, action)
}

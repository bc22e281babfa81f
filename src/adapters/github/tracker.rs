//! GitHub REST issue tracker
//!
//! Implements the `IssueTracker` port. Every list call fetches a single
//! page of 100 items.

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde::de::IgnoredAny;

use crate::Result;
use crate::adapters::http::{client, endpoint, read_json};
use crate::config::GitHubConfig;
use crate::core::models::ActivityItem;
use crate::core::ports::IssueTracker;
use crate::error::Service;

use super::wire::{GhIssue, GhSearchCount};

/// REST API version header value
pub const API_VERSION: &str = "2022-11-28";

const PAGE_SIZE: &str = "100";

/// Issue tracker backed by the GitHub REST API
#[derive(Debug, Clone)]
pub struct GitHubTracker {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl GitHubTracker {
    /// Create a tracker from the GitHub settings
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        Ok(Self {
            client: client(Service::GitHub)?,
            api_url: config.api_url.clone(),
            token: config.token.clone(),
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let request = self
            .client
            .get(endpoint(&self.api_url, path))
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION);

        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl IssueTracker for GitHubTracker {
    async fn list_issues(&self, repo: &str, since: DateTime<Utc>) -> Result<Vec<ActivityItem>> {
        let since_param = timestamp(since);
        let request = self.get(&format!("/repos/{repo}/issues")).query(&[
            ("state", "all"),
            ("since", since_param.as_str()),
            ("per_page", PAGE_SIZE),
        ]);

        let issues: Vec<GhIssue> = read_json(Service::GitHub, request).await?;
        log::debug!("GitHub returned {} issue(s) changed since {since}", issues.len());
        Ok(issues.into_iter().map(GhIssue::into_item).collect())
    }

    async fn count_open_issues(&self, repo: &str) -> Result<usize> {
        let query = format!("repo:{repo} is:issue is:open");
        let request = self.get("/search/issues").query(&[("q", query.as_str()), ("per_page", "1")]);

        let found: GhSearchCount = read_json(Service::GitHub, request).await?;
        Ok(found.total_count)
    }

    async fn list_pull_requests(
        &self,
        repo: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<ActivityItem>> {
        let request = self.get(&format!("/repos/{repo}/pulls")).query(&[
            ("state", "all"),
            ("sort", "updated"),
            ("direction", "desc"),
            ("per_page", PAGE_SIZE),
        ]);

        let pulls: Vec<GhIssue> = read_json(Service::GitHub, request).await?;
        log::debug!("GitHub returned {} pull request(s); narrowing to {since}", pulls.len());
        Ok(pulls.into_iter().map(GhIssue::into_item).collect())
    }

    async fn count_commits(&self, repo: &str, since: DateTime<Utc>) -> Result<usize> {
        let since_param = timestamp(since);
        let request = self
            .get(&format!("/repos/{repo}/commits"))
            .query(&[("since", since_param.as_str()), ("per_page", PAGE_SIZE)]);

        let commits: Vec<IgnoredAny> = read_json(Service::GitHub, request).await?;
        Ok(commits.len())
    }
}

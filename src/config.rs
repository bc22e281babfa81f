//! Run configuration
//!
//! Built once at process start and passed by reference to every component.
//! Sources, later ones winning:
//!
//! 1. Defaults
//! 2. TOML file: `--config PATH`, else `./.repo-pulse.toml`, else
//!    `~/.config/repo-pulse/config.toml`
//! 3. Environment variables (the names GitHub Actions workflows export)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::models::StatusMap;
use crate::{Error, Result};

/// Project-local config filename
pub const LOCAL_CONFIG: &str = ".repo-pulse.toml";

/// Default GitHub REST endpoint
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Default Notion endpoint
pub const NOTION_API_URL: &str = "https://api.notion.com";

/// Notion API version header value
pub const NOTION_VERSION: &str = "2022-06-28";

/// Default Gemini endpoint
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model
pub const GEMINI_MODEL: &str = "gemini-1.5-pro";

/// Complete run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Repository as `owner/name`
    #[serde(default)]
    pub repository: String,

    /// Length of the report window
    #[serde(default = "default_window_hours")]
    pub window_hours: u32,

    /// Offset applied when printing the report date (9 for KST)
    #[serde(default)]
    pub utc_offset_hours: i32,

    /// Labels that may become workspace tags
    #[serde(default = "default_tag_allow_list")]
    pub tag_allow_list: Vec<String>,

    /// Tracker state to workspace status table
    #[serde(default)]
    pub status_map: StatusMap,

    /// GitHub settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Notion settings
    #[serde(default)]
    pub notion: NotionConfig,

    /// Slack settings
    #[serde(default)]
    pub slack: SlackConfig,

    /// Summarization oracle settings
    #[serde(default)]
    pub oracle: OracleConfig,

    /// GitHub login to chat identity (keyed by login)
    #[serde(default)]
    pub users: UserDirectory,
}

const fn default_window_hours() -> u32 {
    24
}

fn default_tag_allow_list() -> Vec<String> {
    ["bug", "fix", "enhancement", "feature", "documentation", "docs", "refactor", "data", "csvs"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: String::new(),
            window_hours: default_window_hours(),
            utc_offset_hours: 0,
            tag_allow_list: default_tag_allow_list(),
            status_map: StatusMap::default(),
            github: GitHubConfig::default(),
            notion: NotionConfig::default(),
            slack: SlackConfig::default(),
            oracle: OracleConfig::default(),
            users: UserDirectory::default(),
        }
    }
}

/// GitHub settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct GitHubConfig {
    /// API token (`GITHUB_TOKEN`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// REST endpoint (`GITHUB_API_URL`)
    #[serde(default = "default_github_url")]
    pub api_url: String,
}

fn default_github_url() -> String {
    GITHUB_API_URL.to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: default_github_url(),
        }
    }
}

/// Notion settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NotionConfig {
    /// Integration token (`NOTION_API_TOKEN`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Target database (`NOTION_DATABASE_ID`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_id: Option<String>,
    /// API endpoint
    #[serde(default = "default_notion_url")]
    pub api_url: String,
}

fn default_notion_url() -> String {
    NOTION_API_URL.to_string()
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            token: None,
            database_id: None,
            api_url: default_notion_url(),
        }
    }
}

/// Slack settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SlackConfig {
    /// Incoming webhook (`SLACK_WEBHOOK_URL`); notifications are skipped without it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

/// Summarization oracle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OracleConfig {
    /// API key (`GEMINI_API_KEY`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// API endpoint
    #[serde(default = "default_gemini_url")]
    pub api_url: String,
}

fn default_model() -> String {
    GEMINI_MODEL.to_string()
}

fn default_gemini_url() -> String {
    GEMINI_API_URL.to_string()
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_url: default_gemini_url(),
        }
    }
}

/// Chat identity of a GitHub user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct UserEntry {
    /// Slack member id, e.g. `U0123ABC`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slack_id: Option<String>,
    /// Human readable name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// GitHub login to chat identity mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserDirectory(BTreeMap<String, UserEntry>);

impl UserDirectory {
    /// Register a user
    pub fn insert(&mut self, login: impl Into<String>, entry: UserEntry) {
        self.0.insert(login.into(), entry);
    }

    /// Slack mention (`<@U123>`) when the login is mapped, else `@login`
    #[must_use]
    pub fn mention(&self, login: &str) -> String {
        self.0
            .get(login)
            .and_then(|u| u.slack_id.as_deref())
            .map_or_else(|| format!("@{login}"), |id| format!("<@{id}>"))
    }

    /// Display name when mapped, else the login
    #[must_use]
    pub fn display_name<'a>(&'a self, login: &'a str) -> &'a str {
        self.0.get(login).and_then(|u| u.display_name.as_deref()).unwrap_or(login)
    }
}

impl Config {
    /// Load from the first config file found, then apply process environment
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::locate(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Config file to read, if any
    ///
    /// An explicit path is returned even when missing so that reading it
    /// reports the error.
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            return Some(local);
        }

        dirs::config_dir()
            .map(|dir| dir.join("repo-pulse").join("config.toml"))
            .filter(|path| path.exists())
    }

    /// Parse a TOML config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("invalid config at {}: {e}", path.display())))
    }

    /// Parse TOML text
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Override settings from environment variables
    ///
    /// `lookup` returns the value of a variable; empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("GITHUB_REPOSITORY") {
            self.repository = v;
        }
        if let Some(v) = get("GITHUB_TOKEN") {
            self.github.token = Some(v);
        }
        if let Some(v) = get("GITHUB_API_URL") {
            self.github.api_url = v;
        }
        if let Some(v) = get("NOTION_API_TOKEN") {
            self.notion.token = Some(v);
        }
        if let Some(v) = get("NOTION_DATABASE_ID") {
            self.notion.database_id = Some(v);
        }
        if let Some(v) = get("SLACK_WEBHOOK_URL") {
            self.slack.webhook_url = Some(v);
        }
        if let Some(v) = get("GEMINI_API_KEY") {
            self.oracle.api_key = Some(v);
        }
    }

    /// Repository, which must look like `owner/name`
    pub fn require_repository(&self) -> Result<&str> {
        let repo = self.repository.trim();
        match repo.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(repo)
            },
            _ if repo.is_empty() => {
                Err(Error::Config("repository is not set (GITHUB_REPOSITORY)".to_string()))
            },
            _ => Err(Error::Config(format!("repository must be owner/name, got '{repo}'"))),
        }
    }

    /// Notion token and database id
    pub fn require_notion(&self) -> Result<(&str, &str)> {
        let token = self
            .notion
            .token
            .as_deref()
            .ok_or_else(|| Error::Config("Notion token is not set (NOTION_API_TOKEN)".to_string()))?;
        let database = self.notion.database_id.as_deref().ok_or_else(|| {
            Error::Config("Notion database is not set (NOTION_DATABASE_ID)".to_string())
        })?;
        Ok((token, database))
    }
}

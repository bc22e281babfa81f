//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `github/` - Issue tracker over the GitHub REST API, webhook payloads
//! - `notion/` - Workspace backed by a Notion database
//! - `slack/` - Notifier posting Block Kit messages to a webhook
//! - `gemini` - Narrative oracle over the Gemini API
//! - `http` - Client construction and response handling shared by all

pub mod gemini;
pub mod github;
pub mod http;
pub mod notion;
pub mod slack;

pub use gemini::GeminiOracle;
pub use github::GitHubTracker;
pub use notion::NotionWorkspace;
pub use slack::SlackNotifier;

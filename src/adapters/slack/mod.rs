//! Slack adapter
//!
//! - [`blocks`] - Block Kit rendering
//! - [`SlackNotifier`] - `Notifier` over an incoming webhook

pub mod blocks;

use async_trait::async_trait;
use reqwest::Client;

use crate::Result;
use crate::adapters::http::{client, read_text};
use crate::core::models::Notification;
use crate::core::ports::Notifier;
use crate::error::Service;

pub use blocks::{SlackBlock, SlackMessage, render};

/// Notifier posting to a Slack incoming webhook
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    client: Client,
    webhook_url: String,
}

impl SlackNotifier {
    /// Create a notifier for a webhook URL
    pub fn new(webhook_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: client(Service::Slack)?,
            webhook_url: webhook_url.into(),
        })
    }
}

#[async_trait]
impl Notifier for SlackNotifier {
    async fn post(&self, notification: &Notification) -> Result<()> {
        let message = render(notification);
        let request = self.client.post(&self.webhook_url).json(&message);
        read_text(Service::Slack, request).await?;
        log::debug!("Slack accepted '{}'", message.text);
        Ok(())
    }
}

//! Slack Block Kit payloads
//!
//! Renders a channel-neutral [`Notification`] into an incoming-webhook
//! message. With an accent colour the body goes into a coloured
//! attachment; without one it follows a divider in the main blocks.

use serde::Serialize;

use crate::core::models::{Field, Notification};
use crate::text::{clip_chars, sanitize_for_slack};

/// Longest free text body
pub const MAX_TEXT: usize = 2000;

/// Longest header text accepted by Slack
pub const MAX_HEADER: usize = 150;

/// Fields per section
pub const FIELDS_PER_SECTION: usize = 2;

/// A Slack text object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackText {
    #[serde(rename = "type")]
    text_type: &'static str,
    /// Content
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    emoji: Option<bool>,
}

impl SlackText {
    /// Plain text object
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text",
            text: text.into(),
            emoji: Some(true),
        }
    }

    /// Markdown text object
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            text_type: "mrkdwn",
            text: text.into(),
            emoji: None,
        }
    }
}

/// A Block Kit layout block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackBlock {
    /// Header block
    Header {
        /// Plain text
        text: SlackText,
    },
    /// Section block
    Section {
        /// Main text
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<SlackText>,
        /// Two-column fields
        #[serde(skip_serializing_if = "Option::is_none")]
        fields: Option<Vec<SlackText>>,
    },
    /// Divider block
    Divider {},
    /// Small print
    Context {
        /// Text elements
        elements: Vec<SlackText>,
    },
}

impl SlackBlock {
    fn text_section(text: String) -> Self {
        Self::Section {
            text: Some(SlackText::mrkdwn(text)),
            fields: None,
        }
    }
}

/// A coloured legacy attachment wrapping blocks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackAttachment {
    /// Bar colour, `#rrggbb`
    pub color: String,
    /// Blocks shown inside
    pub blocks: Vec<SlackBlock>,
}

/// Incoming webhook message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlackMessage {
    /// Fallback text for notifications
    pub text: String,
    /// Main blocks
    pub blocks: Vec<SlackBlock>,
    /// Coloured attachments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<SlackAttachment>,
}

fn field_text(field: &Field) -> SlackText {
    SlackText::mrkdwn(format!("*{}:*\n{}", field.label, field.value))
}

/// Render a notification as a webhook message
#[must_use]
pub fn render(notification: &Notification) -> SlackMessage {
    let header = clip_chars(&notification.header, MAX_HEADER).to_string();
    let mut blocks = vec![SlackBlock::Header {
        text: SlackText::plain(header.clone()),
    }];

    blocks.extend(notification.fields.chunks(FIELDS_PER_SECTION).map(|chunk| {
        SlackBlock::Section {
            text: None,
            fields: Some(chunk.iter().map(field_text).collect()),
        }
    }));

    let body = notification
        .body
        .as_deref()
        .map(|b| sanitize_for_slack(b, MAX_TEXT))
        .filter(|b| !b.is_empty());

    let mut attachments = Vec::new();
    match (&notification.accent, body) {
        (Some(color), Some(body)) => attachments.push(SlackAttachment {
            color: color.clone(),
            blocks: vec![SlackBlock::text_section(body)],
        }),
        (None, Some(body)) => {
            blocks.push(SlackBlock::Divider {});
            blocks.push(SlackBlock::text_section(body));
        },
        (_, None) => {},
    }

    if !notification.context.is_empty() {
        blocks.push(SlackBlock::Context {
            elements: notification.context.iter().map(SlackText::mrkdwn).collect(),
        });
    }

    SlackMessage {
        text: header,
        blocks,
        attachments,
    }
}

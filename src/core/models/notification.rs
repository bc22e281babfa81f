//! Channel-neutral chat notifications

use serde::{Deserialize, Serialize};

/// A labelled value shown side by side with other fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Label, rendered bold
    pub label: String,
    /// Value, may contain channel markup such as links
    pub value: String,
}

impl Field {
    /// Create a field
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A condensed chat message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Header line
    pub header: String,
    /// Fields shown in a grid
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Free text body (sanitized by the adapter)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Accent colour (`#rrggbb`); when set the body is shown in a coloured attachment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    /// Small print lines at the bottom
    #[serde(default)]
    pub context: Vec<String>,
}

/// Outcome of a best-effort delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Delivery {
    /// Accepted by the channel
    Sent,
    /// Not attempted (no channel configured)
    Skipped,
    /// Attempted and failed; logged, never fatal
    Failed(String),
}

//! Narrative returned by the summarization oracle

use serde::{Deserialize, Serialize};

/// How the narrative was obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "reason", rename_all = "snake_case")]
pub enum NarrativeQuality {
    /// Both section markers found
    Parsed,
    /// Markers missing; trend is a truncated prefix of the raw answer
    Truncated,
    /// The oracle could not be reached or refused; both parts are fixed strings
    Fallback(String),
}

/// Trend analysis and comment for a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    /// Trend analysis paragraph
    pub trend: String,
    /// Closing comment paragraph
    pub comment: String,
    /// Degradation marker
    pub quality: NarrativeQuality,
}

impl Narrative {
    /// Check if the narrative came through without degradation
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        !matches!(self.quality, NarrativeQuality::Parsed)
    }
}

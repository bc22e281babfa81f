//! Issue severity tiers
//!
//! Severity is never stored on an item. It is recomputed from labels
//! every time it is needed (see [`crate::core::services::classifier`]).

use serde::{Deserialize, Serialize};

/// Severity tier of an activity item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks players or the build, needs attention today
    Critical,
    /// Bugs and high priority work
    Major,
    /// Everything else
    Normal,
}

impl Severity {
    /// All tiers in report order
    pub const ALL: [Self; 3] = [Self::Critical, Self::Major, Self::Normal];

    /// Heading used for this tier in reports
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Major => "Major",
            Self::Normal => "Normal",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Major => write!(f, "major"),
            Self::Normal => write!(f, "normal"),
        }
    }
}


//! Notion database properties and query filters
//!
//! The database is expected to have these columns:
//!
//! | Column       | Type         |
//! |--------------|--------------|
//! | `제목`        | title        |
//! | `타입`        | select       |
//! | `상태`        | select       |
//! | `태그`        | multi-select |
//! | `Github URL` | url          |

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::models::{RecordDraft, RecordKey, WorkspaceStatus};

use super::blocks::RichText;

/// Title column
pub const TITLE: &str = "제목";
/// Record type column
pub const TYPE: &str = "타입";
/// Status column
pub const STATUS: &str = "상태";
/// Tags column
pub const TAGS: &str = "태그";
/// Source URL column
pub const URL: &str = "Github URL";

/// A select option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// Option name
    pub name: String,
}

impl SelectOption {
    fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Value of one property in a create or update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// Title column
    Title {
        /// Title runs
        title: Vec<RichText>,
    },
    /// Select column
    Select {
        /// Chosen option
        select: SelectOption,
    },
    /// Multi-select column
    MultiSelect {
        /// Chosen options
        multi_select: Vec<SelectOption>,
    },
    /// URL column
    Url {
        /// The URL
        url: String,
    },
}

/// Property map, keyed by column name
pub type Properties = BTreeMap<&'static str, PropertyValue>;

/// All properties of a new record
#[must_use]
pub fn draft_properties(draft: &RecordDraft) -> Properties {
    let mut props = Properties::new();
    props.insert(TITLE, PropertyValue::Title {
        title: vec![RichText::plain(&draft.title)],
    });
    props.insert(TYPE, PropertyValue::Select {
        select: SelectOption::new(draft.record_type.label()),
    });
    props.extend(status_properties(draft.status));
    if !draft.tags.is_empty() {
        props.insert(TAGS, PropertyValue::MultiSelect {
            multi_select: draft.tags.iter().map(SelectOption::new).collect(),
        });
    }
    if let Some(url) = &draft.url {
        props.insert(URL, PropertyValue::Url { url: url.clone() });
    }
    props
}

/// The status property alone, for patches
#[must_use]
pub fn status_properties(status: WorkspaceStatus) -> Properties {
    let mut props = Properties::new();
    props.insert(STATUS, PropertyValue::Select {
        select: SelectOption::new(status.label()),
    });
    props
}

/// Exact URL match
#[derive(Debug, Clone, Serialize)]
pub struct UrlCondition {
    /// URL to compare
    pub equals: String,
}

/// Title substring match
#[derive(Debug, Clone, Serialize)]
pub struct TitleCondition {
    /// Text the title must contain
    pub contains: String,
}

/// Database query filter for one lookup key
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Filter {
    /// Match on the URL column
    Url {
        /// Column name
        property: &'static str,
        /// Condition
        url: UrlCondition,
    },
    /// Match on the title column
    Title {
        /// Column name
        property: &'static str,
        /// Condition
        title: TitleCondition,
    },
}

impl From<&RecordKey> for Filter {
    fn from(key: &RecordKey) -> Self {
        match key {
            RecordKey::Url(url) => Self::Url {
                property: URL,
                url: UrlCondition {
                    equals: url.clone(),
                },
            },
            RecordKey::TitleContains(text) | RecordKey::ItemReference(text) => Self::Title {
                property: TITLE,
                title: TitleCondition {
                    contains: text.clone(),
                },
            },
        }
    }
}

/// Properties read back from a page: the title and the status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageProperties {
    /// Title column
    #[serde(rename = "제목", default)]
    pub title: Option<TitleProperty>,
    /// Status column
    #[serde(rename = "상태", default)]
    pub status: Option<SelectProperty>,
}

/// A title property as returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TitleProperty {
    /// Title runs
    #[serde(default)]
    pub title: Vec<TitleRun>,
}

/// One run of a returned title
#[derive(Debug, Clone, Deserialize)]
pub struct TitleRun {
    /// Text without formatting
    #[serde(default)]
    pub plain_text: String,
}

/// A select property as returned by the API
#[derive(Debug, Clone, Deserialize)]
pub struct SelectProperty {
    /// Selected option, absent when empty
    #[serde(default)]
    pub select: Option<SelectOption>,
}

impl PageProperties {
    /// Plain-text title; `None` when the column is missing
    #[must_use]
    pub fn title(&self) -> Option<String> {
        self.title
            .as_ref()
            .map(|p| p.title.iter().map(|run| run.plain_text.as_str()).collect())
    }

    /// Current status; unknown labels read as `None`
    #[must_use]
    pub fn status(&self) -> Option<WorkspaceStatus> {
        self.status
            .as_ref()
            .and_then(|p| p.select.as_ref())
            .and_then(|o| WorkspaceStatus::from_label(&o.name))
    }
}

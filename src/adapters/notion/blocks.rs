//! Notion block payloads
//!
//! Typed builders for the subset of block types reports use.

use serde::Serialize;

use crate::core::models::{Block, HeadingLevel};
use crate::text::clip_chars;

/// Most children accepted by a single create request
pub const MAX_CHILDREN: usize = 100;

/// Longest content of a single rich text object
pub const MAX_RICH_TEXT: usize = 2000;

/// Link target of a rich text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Target URL
    pub url: String,
}

/// Text content of a rich text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextContent {
    /// The text, clipped to [`MAX_RICH_TEXT`]
    pub content: String,
    /// Optional hyperlink
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// Styling of a rich text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Annotations {
    /// Italic text
    pub italic: bool,
    /// Notion colour name
    pub color: &'static str,
}

/// A rich text run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RichText {
    #[serde(rename = "type")]
    kind: &'static str,
    /// Text and link
    pub text: TextContent,
    /// Styling, default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<Annotations>,
}

impl RichText {
    /// Plain text run
    #[must_use]
    pub fn plain(content: &str) -> Self {
        Self {
            kind: "text",
            text: TextContent {
                content: clip_chars(content, MAX_RICH_TEXT).to_string(),
                link: None,
            },
            annotations: None,
        }
    }

    /// Text run linking to `url`
    #[must_use]
    pub fn linked(content: &str, url: &str) -> Self {
        let mut run = Self::plain(content);
        run.text.link = Some(Link {
            url: url.to_string(),
        });
        run
    }

    /// Grey italic run for trailing annotations
    #[must_use]
    pub fn muted(content: &str) -> Self {
        let mut run = Self::plain(content);
        run.annotations = Some(Annotations {
            italic: true,
            color: "gray",
        });
        run
    }
}

/// Body of every text-bearing block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextBody {
    /// Runs in order
    pub rich_text: Vec<RichText>,
}

impl TextBody {
    fn plain(content: &str) -> Self {
        Self {
            rich_text: vec![RichText::plain(content)],
        }
    }
}

/// Empty object body (dividers)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Empty {}

/// A block as the Notion API expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum NotionBlock {
    /// Top level heading
    #[serde(rename = "heading_1")]
    Heading1 {
        /// Body
        heading_1: TextBody,
    },
    /// Section heading
    #[serde(rename = "heading_2")]
    Heading2 {
        /// Body
        heading_2: TextBody,
    },
    /// Sub-section heading
    #[serde(rename = "heading_3")]
    Heading3 {
        /// Body
        heading_3: TextBody,
    },
    /// Bullet point
    #[serde(rename = "bulleted_list_item")]
    Bulleted {
        /// Body
        bulleted_list_item: TextBody,
    },
    /// Numbered entry
    #[serde(rename = "numbered_list_item")]
    Numbered {
        /// Body
        numbered_list_item: TextBody,
    },
    /// Paragraph
    #[serde(rename = "paragraph")]
    Paragraph {
        /// Body
        paragraph: TextBody,
    },
    /// Horizontal rule
    #[serde(rename = "divider")]
    Divider {
        /// Always empty
        divider: Empty,
    },
}

impl From<&Block> for NotionBlock {
    fn from(block: &Block) -> Self {
        match block {
            Block::Heading { level, text } => {
                let body = TextBody::plain(text);
                match level {
                    HeadingLevel::H1 => Self::Heading1 { heading_1: body },
                    HeadingLevel::H2 => Self::Heading2 { heading_2: body },
                    HeadingLevel::H3 => Self::Heading3 { heading_3: body },
                }
            },
            Block::Bullet { text } => Self::Bulleted {
                bulleted_list_item: TextBody::plain(text),
            },
            Block::Numbered {
                text,
                link,
                annotation,
            } => {
                let mut rich_text = vec![match link {
                    Some(url) => RichText::linked(text, url),
                    None => RichText::plain(text),
                }];
                if let Some(note) = annotation {
                    rich_text.push(RichText::muted(&format!(" {note}")));
                }
                Self::Numbered {
                    numbered_list_item: TextBody { rich_text },
                }
            },
            Block::Paragraph { text } => Self::Paragraph {
                paragraph: TextBody::plain(text),
            },
            Block::Divider => Self::Divider { divider: Empty {} },
        }
    }
}

/// Convert document blocks, keeping at most [`MAX_CHILDREN`]
#[must_use]
pub fn to_children(blocks: &[Block]) -> Vec<NotionBlock> {
    if blocks.len() > MAX_CHILDREN {
        log::warn!("Report has {} blocks; only the first {MAX_CHILDREN} are written", blocks.len());
    }
    blocks.iter().take(MAX_CHILDREN).map(NotionBlock::from).collect()
}

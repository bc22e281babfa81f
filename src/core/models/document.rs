//! Report document model
//!
//! A [`ReportDocument`] is an ordered list of [`Block`]s. It is built once
//! per run, handed to the publisher and then dropped. Adapters translate
//! blocks into their own wire format.

use serde::{Deserialize, Serialize};

/// Heading depth (1-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// Top-level heading
    H1,
    /// Section heading
    H2,
    /// Sub-section heading
    H3,
}

impl HeadingLevel {
    /// Numeric depth
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
        }
    }

    /// Build from a numeric depth, `None` outside 1-3
    #[must_use]
    pub const fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            _ => None,
        }
    }
}

/// One block of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Heading
    Heading {
        /// Depth
        level: HeadingLevel,
        /// Heading text
        text: String,
    },
    /// Bulleted list entry
    Bullet {
        /// Entry text
        text: String,
    },
    /// Numbered list entry with an optional hyperlink and trailing annotation
    Numbered {
        /// Entry text (hyperlinked when `link` is set)
        text: String,
        /// Target of the hyperlink
        #[serde(default, skip_serializing_if = "Option::is_none")]
        link: Option<String>,
        /// Plain text appended after the linked part
        #[serde(default, skip_serializing_if = "Option::is_none")]
        annotation: Option<String>,
    },
    /// Free text paragraph
    Paragraph {
        /// Paragraph text
        text: String,
    },
    /// Horizontal rule
    Divider,
}

impl Block {
    /// Heading block
    #[must_use]
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    /// Bullet block
    #[must_use]
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::Bullet { text: text.into() }
    }

    /// Numbered entry block
    #[must_use]
    pub fn numbered(
        text: impl Into<String>,
        link: Option<String>,
        annotation: Option<String>,
    ) -> Self {
        Self::Numbered {
            text: text.into(),
            link,
            annotation,
        }
    }

    /// Paragraph block
    #[must_use]
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// Render the block as a single Markdown line
    #[must_use]
    pub fn to_markdown(&self) -> String {
        match self {
            Self::Heading { level, text } => {
                format!("{} {text}", "#".repeat(usize::from(level.depth())))
            },
            Self::Bullet { text } => format!("- {text}"),
            Self::Numbered {
                text,
                link,
                annotation,
            } => {
                let head = link
                    .as_ref()
                    .map_or_else(|| text.clone(), |url| format!("[{text}]({url})"));
                match annotation {
                    Some(note) => format!("1. {head} {note}"),
                    None => format!("1. {head}"),
                }
            },
            Self::Paragraph { text } => text.clone(),
            Self::Divider => "---".to_string(),
        }
    }
}

/// A titled, ordered sequence of blocks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Document title (also the workspace record title)
    pub title: String,
    /// Body blocks in render order
    pub blocks: Vec<Block>,
}

impl ReportDocument {
    /// Empty document with a title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a block
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Headings in order, handy for inspecting the layout
    #[must_use]
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Heading { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Render the whole document as Markdown
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!("# {}\n\n", self.title);
        for block in &self.blocks {
            out.push_str(&block.to_markdown());
            out.push('\n');
        }
        out
    }
}

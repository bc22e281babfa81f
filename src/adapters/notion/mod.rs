//! Notion adapter
//!
//! - [`blocks`] - Report blocks as Notion block payloads
//! - [`properties`] - Database columns, property values and filters
//! - [`workspace`] - `Workspace` implementation

pub mod blocks;
pub mod properties;
pub mod workspace;

pub use workspace::NotionWorkspace;

//! Narrative oracle port
//!
//! The summarization backend is opaque: a prompt goes in, free text comes out.

use async_trait::async_trait;

use crate::Result;

/// A text generation service
#[async_trait]
pub trait NarrativeOracle: Send + Sync {
    /// Generate free text for a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;
}

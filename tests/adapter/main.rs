//! Adapter tests
//!
//! Tests for the HTTP adapters against a local wiremock server:
//! - GitHub issue tracker
//! - Notion workspace
//! - Slack notifier
//! - Gemini oracle

mod gemini_test;

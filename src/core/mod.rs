//! Core domain logic for repo-pulse
//!
//! This module contains the business logic with no direct I/O.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ActivityItem`, `Severity`, `ReportDocument`, ...)
//! - `services/` - Business logic orchestration
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;

//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between core business logic
//! and external systems (issue tracker, workspace, chat, text oracle).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The core domain logic depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod issue_tracker;
mod notifier;
mod oracle;
mod workspace;

pub use issue_tracker::IssueTracker;
pub use notifier::Notifier;
pub use oracle::NarrativeOracle;
pub use workspace::Workspace;

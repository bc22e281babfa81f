//! Command implementations

use repo_pulse::adapters::SlackNotifier;
use repo_pulse::core::ports::Notifier;

mod notify;
mod report;
mod sync;

pub use notify::notify;
pub use report::report;
pub use sync::sync;

/// Slack webhook as the chat port
fn notifier_port(notifier: &SlackNotifier) -> &dyn Notifier {
    notifier
}

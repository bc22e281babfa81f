//! Notifier port

use async_trait::async_trait;

use crate::Result;
use crate::core::models::Notification;

/// A chat channel accepting notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a notification
    async fn post(&self, notification: &Notification) -> Result<()>;
}

use async_trait::async_trait;

use crate::domain::notification::NotificationEvent;

#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    #[error("mailer rejected notification with status {0}")]
    Rejected(u16),

    #[error("mailer transport error: {0}")]
    Transport(String),
}

/// Delivers administrative notifications. At most one attempt per call.
#[async_trait]
pub trait Notifier: Send + Sync + 'static {
    async fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for std::sync::Arc<T> {
    async fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        (**self).notify(event).await
    }
}

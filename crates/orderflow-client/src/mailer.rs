use async_trait::async_trait;
use orderflow_types::domain::notification::NotificationEvent;
use orderflow_types::ports::notifier::{Notifier, NotifyError};

use crate::{ClientBuilder, HttpClient};

/// Posts notifications to `<base>/send`. The response body is ignored.
#[derive(Clone)]
pub struct MailerClient {
    http: HttpClient,
}

impl From<HttpClient> for MailerClient {
    fn from(http: HttpClient) -> Self {
        Self { http }
    }
}

impl MailerClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        Self::builder(base_url)?.build()
    }

    pub fn builder(base_url: &str) -> anyhow::Result<ClientBuilder<Self>> {
        ClientBuilder::new(base_url)
    }
}

#[async_trait]
impl Notifier for MailerClient {
    async fn notify(&self, event: &NotificationEvent) -> Result<(), NotifyError> {
        let url = self
            .http
            .url("send")
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        tracing::debug!(%url, subject = event.subject(), "sending notification");

        let res = self
            .http
            .post(url)
            .json(event)
            .send()
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            Ok(())
        } else {
            tracing::warn!(%status, "mailer rejected notification");
            Err(NotifyError::Rejected(status.as_u16()))
        }
    }
}

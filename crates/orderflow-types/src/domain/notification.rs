use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[\w\-.]+@([\w-]+\.)+[\w-]{2,4}$").expect("email pattern compiles")
});

pub fn is_valid_email(address: &str) -> bool {
    EMAIL.is_match(address)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NotificationError {
    #[error("notification subject is empty")]
    EmptySubject,

    #[error("notification body is empty")]
    EmptyBody,

    #[error("invalid recipient address: {0}")]
    InvalidRecipient(String),
}

/// An administrative email. Serializes to the mailer's `/send` payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationEvent {
    subject: String,
    body: String,
    recipient_address: String,
}

impl NotificationEvent {
    pub fn new(
        subject: impl Into<String>,
        body: impl Into<String>,
        recipient_address: impl Into<String>,
    ) -> Result<Self, NotificationError> {
        let subject = subject.into();
        let body = body.into();
        let recipient_address = recipient_address.into();
        if subject.trim().is_empty() {
            return Err(NotificationError::EmptySubject);
        }
        if body.trim().is_empty() {
            return Err(NotificationError::EmptyBody);
        }
        if !is_valid_email(&recipient_address) {
            return Err(NotificationError::InvalidRecipient(recipient_address));
        }
        Ok(Self {
            subject,
            body,
            recipient_address,
        })
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn recipient_address(&self) -> &str {
        &self.recipient_address
    }
}

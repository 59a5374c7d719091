use anyhow::Context;
use orderflow_types::domain::notification::is_valid_email;
use std::env;
use std::time::Duration;

use crate::application::order_workflow::WorkflowConfig;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: String,
    pub database_url: Option<String>,
    pub user_service_url: String,
    pub mailer_url: String,
    pub admin_email: String,
    /// Success notifications are only sent when set. Failure notifications
    /// are always attempted.
    pub send_mails: bool,
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let server_port = lookup("SERVER_PORT").unwrap_or_else(|| "3000".into());
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let user_service_url =
            lookup("USER_SERVICE_URL").unwrap_or_else(|| "http://localhost".into());
        let mailer_url = lookup("MAILER_URL").unwrap_or_else(|| "https://mailer.com".into());

        let admin_email = lookup("ADMIN_EMAIL").unwrap_or_else(|| "admin@orderflow.dev".into());
        if !is_valid_email(&admin_email) {
            anyhow::bail!("ADMIN_EMAIL is not a valid email address: {admin_email}");
        }

        let send_mails = lookup("SEND_MAILS")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        let timeout_ms: u64 = match lookup("HTTP_TIMEOUT_MS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("HTTP_TIMEOUT_MS must be milliseconds, got {v:?}"))?,
            None => 5000,
        };
        if timeout_ms == 0 {
            anyhow::bail!("HTTP_TIMEOUT_MS must be greater than zero");
        }

        Ok(Self {
            server_port,
            database_url,
            user_service_url,
            mailer_url,
            admin_email,
            send_mails,
            http_timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn workflow_config(&self) -> WorkflowConfig {
        WorkflowConfig {
            admin_email: self.admin_email.clone(),
            send_success_mail: self.send_mails,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.server_port, "3000");
        assert!(config.database_url.is_none());
        assert_eq!(config.user_service_url, "http://localhost");
        assert_eq!(config.mailer_url, "https://mailer.com");
        assert!(!config.send_mails);
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_PORT", "8080"),
            ("DATABASE_URL", "sqlite://data/orders.db"),
            ("ADMIN_EMAIL", "ops@shop.io"),
            ("SEND_MAILS", "TRUE"),
            ("HTTP_TIMEOUT_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(config.server_port, "8080");
        assert_eq!(config.database_url.as_deref(), Some("sqlite://data/orders.db"));
        assert!(config.send_mails);
        assert_eq!(config.http_timeout, Duration::from_millis(250));

        let workflow = config.workflow_config();
        assert_eq!(workflow.admin_email, "ops@shop.io");
        assert!(workflow.send_success_mail);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(Config::from_lookup(lookup(&[("ADMIN_EMAIL", "nobody")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HTTP_TIMEOUT_MS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[("HTTP_TIMEOUT_MS", "0")])).is_err());
    }

    #[test]
    fn flag_parsing() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag("on"));
        assert!(!parse_flag(""));
    }
}

//! Emergency alert delivery
//!
//! An [`AlertDispatcher`] is where an emergency message leaves the process.
//! The default dispatcher only writes a log line; the email dispatcher relays
//! the message to a contact over SMTP.

use std::{env, sync::Arc};

use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
    Message, Transport, transport::smtp::SmtpTransport,
    transport::smtp::authentication::Credentials,
};

use crate::config::AlertConfig;

#[async_trait]
pub trait AlertDispatcher: Send + Sync {
    /// Short name of the delivery channel, used in logs
    fn channel(&self) -> &'static str;

    async fn dispatch(&self, message: &str) -> Result<()>;
}

/// Writes alerts to the log and nowhere else
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAlertDispatcher;

#[async_trait]
impl AlertDispatcher for LogAlertDispatcher {
    fn channel(&self) -> &'static str {
        "log"
    }

    async fn dispatch(&self, message: &str) -> Result<()> {
        tracing::warn!("🚨 Emergency Alert Sent: {}", message);
        Ok(())
    }
}

/// Relays alerts by email. Credentials and the recipient are read from the
/// environment variables named in [`AlertConfig`] at send time.
#[derive(Debug, Clone)]
pub struct EmailAlertDispatcher {
    relay: String,
    from_env: String,
    password_env: String,
    recipient_env: String,
}

impl EmailAlertDispatcher {
    #[must_use]
    pub fn new(config: &AlertConfig) -> Self {
        Self {
            relay: config.smtp_relay.clone(),
            from_env: config.from_env.clone(),
            password_env: config.password_env.clone(),
            recipient_env: config.recipient_env.clone(),
        }
    }

    fn create_mailer(&self) -> Result<SmtpTransport> {
        let address = env::var(&self.from_env)
            .with_context(|| format!("Missing {} env var", self.from_env))?;
        let password = env::var(&self.password_env)
            .with_context(|| format!("Missing {} env var", self.password_env))?;

        let credentials = Credentials::new(address, password);

        let mailer = SmtpTransport::relay(&self.relay)?
            .credentials(credentials)
            .build();

        Ok(mailer)
    }

    fn build_message(&self, message: &str) -> Result<Message> {
        let recipient = env::var(&self.recipient_env)
            .with_context(|| format!("Missing {} env var", self.recipient_env))?;
        let sender = env::var(&self.from_env)
            .with_context(|| format!("Missing {} env var", self.from_env))?;

        let email = Message::builder()
            .from(
                format!("HealthAI <{}>", sender)
                    .parse()
                    .context("Failed to parse from address")?,
            )
            .to(recipient.parse().context("Failed to parse to address")?)
            .subject("🚨 Emergency Alert")
            .body(format!(
                "An emergency alert was raised from the health assistant:\n\n{}",
                message
            ))?;

        Ok(email)
    }
}

#[async_trait]
impl AlertDispatcher for EmailAlertDispatcher {
    fn channel(&self) -> &'static str {
        "email"
    }

    async fn dispatch(&self, message: &str) -> Result<()> {
        let email = self.build_message(message)?;
        let mailer = self.create_mailer()?;

        // SmtpTransport is blocking
        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .context("Email task failed")?
            .context("Failed to send emergency alert email")?;

        tracing::info!(
            "Sent emergency alert email via {} to contact from {}",
            self.relay,
            self.recipient_env
        );
        Ok(())
    }
}

/// Build the dispatcher selected by the configuration
#[must_use]
pub fn dispatcher_from_config(config: &AlertConfig) -> Arc<dyn AlertDispatcher> {
    match config.channel.as_str() {
        "email" => Arc::new(EmailAlertDispatcher::new(config)),
        _ => Arc::new(LogAlertDispatcher),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_log_dispatcher_accepts_any_message() {
        let dispatcher = LogAlertDispatcher;
        assert!(dispatcher.dispatch("chest pain").await.is_ok());
        assert!(dispatcher.dispatch("").await.is_ok());
    }

    #[test]
    fn test_dispatcher_from_config() {
        let mut config = AlertConfig::default();
        assert_eq!(dispatcher_from_config(&config).channel(), "log");

        config.channel = "email".to_string();
        assert_eq!(dispatcher_from_config(&config).channel(), "email");
    }

    #[tokio::test]
    async fn test_email_dispatcher_fails_without_environment() {
        let config = AlertConfig {
            recipient_env: "HEALTHAI_TEST_UNSET_RECIPIENT".to_string(),
            from_env: "HEALTHAI_TEST_UNSET_SENDER".to_string(),
            password_env: "HEALTHAI_TEST_UNSET_PASSWORD".to_string(),
            ..AlertConfig::default()
        };
        let dispatcher = EmailAlertDispatcher::new(&config);
        let err = dispatcher.dispatch("help").await.unwrap_err();
        assert!(err.to_string().contains("HEALTHAI_TEST_UNSET_RECIPIENT"));
    }
}

use async_trait::async_trait;
use serde::Serialize;
use crate::config::{MailConfig, MailTransport};
use crate::errors::MailError;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Outbound e-mail channel. One instance lives for the whole process.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &Email) -> Result<(), MailError>;
}

/// Posts each message as JSON to an authenticated mail relay.
pub struct HttpMailer {
    http: reqwest::Client,
    endpoint: String,
    username: String,
    password: Option<String>,
}

impl HttpMailer {
    pub fn from_config(config: &MailConfig) -> Result<Self, MailError> {
        let endpoint = config.endpoint.clone().ok_or(MailError::NotConfigured("mail.endpoint"))?;
        let username = config.username.clone().ok_or(MailError::NotConfigured("mail.username"))?;

        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
            username,
            password: config.password.clone(),
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        let response = self
            .http
            .post(&self.endpoint)
            .basic_auth(&self.username, self.password.as_ref())
            .json(email)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MailError::Rejected(response.status().as_u16()));
        }
        Ok(())
    }
}

/// Writes messages to the log instead of delivering them.
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &Email) -> Result<(), MailError> {
        tracing::info!(to = %email.to, subject = %email.subject, "Mail delivery disabled, logging message");
        tracing::debug!("Message body: {}", email.text);
        Ok(())
    }
}

pub fn mailer_from_config(config: &MailConfig) -> Result<Box<dyn Mailer>, MailError> {
    Ok(match config.transport {
        MailTransport::Http => Box::new(HttpMailer::from_config(config)?),
        MailTransport::Log => Box::new(LogMailer),
    })
}

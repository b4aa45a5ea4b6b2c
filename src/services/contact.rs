//! Contact intake service
//!
//! Stores contact-form submissions in an in-memory list and, when SMTP
//! credentials are configured, emails a notification. Both steps are
//! best-effort: their outcomes are reported in the receipt but never
//! fail the submission.

use chrono::Utc;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::SmtpConfig;
use crate::models::{ContactMessage, ContactReceipt};

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address or message: {0}")]
    Build(String),
    #[error("SMTP send failed: {0}")]
    Send(#[from] lettre::transport::smtp::Error),
}

/// Async SMTP notifier for new contact messages
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(MailError::Send)?
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            from: config.username.clone(),
            to: config.notify_to.clone(),
        })
    }

    async fn notify(&self, message: &ContactMessage) -> Result<(), MailError> {
        let email = Message::builder()
            .from(
                format!("Portfolio Contact Form <{}>", self.from)
                    .parse()
                    .map_err(|e| MailError::Build(format!("{e}")))?,
            )
            .to(self.to.parse().map_err(|e| MailError::Build(format!("{e}")))?)
            .reply_to(
                message
                    .email
                    .parse()
                    .map_err(|e| MailError::Build(format!("{e}")))?,
            )
            .subject(format!("New Portfolio Contact from {}", message.name))
            .header(ContentType::TEXT_PLAIN)
            .body(format!(
                "Name: {}\nEmail: {}\nReceived: {}\n\n{}",
                message.name, message.email, message.created_at, message.message
            ))
            .map_err(|e| MailError::Build(format!("{e}")))?;

        self.transport.send(email).await?;
        Ok(())
    }
}

/// In-memory contact store with an optional mail notifier
pub struct ContactService {
    messages: RwLock<Vec<ContactMessage>>,
    mailer: Option<Mailer>,
}

impl ContactService {
    pub fn new(mailer: Option<Mailer>) -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            mailer,
        }
    }

    /// Store a submission and send the notification email when
    /// configured. Neither failure aborts the submission.
    pub async fn submit(&self, name: String, email: String, text: String) -> ContactReceipt {
        let message = ContactMessage {
            id: Uuid::new_v4(),
            name,
            email,
            message: text,
            status: "new".to_string(),
            created_at: Utc::now(),
        };

        let email_sent = match &self.mailer {
            Some(mailer) => match mailer.notify(&message).await {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "contact notification email failed");
                    false
                }
            },
            None => false,
        };

        info!(name = %message.name, email = %message.email, "contact form submission received");
        self.messages.write().await.push(message);

        ContactReceipt {
            saved: true,
            email_sent,
        }
    }

    /// All stored messages, newest first
    pub async fn list(&self) -> Vec<ContactMessage> {
        let mut messages = self.messages.read().await.clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }

    /// Update a message's triage status
    pub async fn update_status(&self, id: Uuid, status: String) -> Option<ContactMessage> {
        let mut messages = self.messages.write().await;
        let message = messages.iter_mut().find(|m| m.id == id)?;
        message.status = status;
        Some(message.clone())
    }
}

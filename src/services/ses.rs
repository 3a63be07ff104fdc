// src/services/ses.rs

//! AWS SES notification dispatch.

use async_trait::async_trait;
use aws_sdk_ses::Client;
use aws_sdk_ses::types::{Body, Content, Destination, Message};
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::NotificationMessage;
use crate::services::Notifier;

const CHARSET: &str = "UTF-8";

/// SES-backed notifier scoped to one verified sender identity.
pub struct SesNotifier {
    client: Client,
    sender: String,
}

impl SesNotifier {
    /// Create a notifier sending from the given identity.
    pub fn new(client: Client, sender: impl Into<String>) -> Self {
        Self {
            client,
            sender: sender.into(),
        }
    }
}

#[async_trait]
impl Notifier for SesNotifier {
    /// Send one message to one recipient.
    ///
    /// Callers treat a returned error as best-effort (logged, not fatal);
    /// partial delivery across the recipient list is accepted.
    async fn send(&self, recipient: &str, message: &NotificationMessage) -> Result<()> {
        let subject = Content::builder()
            .charset(CHARSET)
            .data(&message.subject)
            .build()
            .map_err(|e| AppError::delivery(format!("invalid subject content: {e}")))?;

        let text = Content::builder()
            .charset(CHARSET)
            .data(&message.body)
            .build()
            .map_err(|e| AppError::delivery(format!("invalid body content: {e}")))?;

        let destination = Destination::builder().to_addresses(recipient).build();
        let email = Message::builder()
            .subject(subject)
            .body(Body::builder().text(text).build())
            .build();

        let output = self
            .client
            .send_email()
            .destination(destination)
            .message(email)
            .source(&self.sender)
            .send()
            .await
            .map_err(|e| AppError::delivery(e.into_service_error().to_string()))?;

        info!(
            "Email sent to {} (message id: {})",
            recipient,
            output.message_id()
        );
        Ok(())
    }
}

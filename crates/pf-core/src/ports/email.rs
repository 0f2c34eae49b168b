use crate::contact::ContactFields;

/// Provider acknowledgement of a delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailReceipt {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailSendError {
    #[error("email provider rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("email transport failed: {0}")]
    Transport(String),
}

/// Delivers a contact message through the configured provider.
///
/// Routing identifiers (service, template, public key) are owned by the
/// adapter; callers only supply the visitor's values.
#[async_trait::async_trait(?Send)]
pub trait EmailSenderPort: Send + Sync {
    async fn send(&self, fields: &ContactFields) -> Result<EmailReceipt, EmailSendError>;
}

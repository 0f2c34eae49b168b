//! EmailJS REST client.
//!
//! Sends the contact form through `POST {api_base}/api/v1.0/email/send`.
//! The `template_params` keys (`nome`, `email`, `messaggio`) are fixed by the
//! template configured on the provider side.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, warn};

use pf_core::config::EmailConfig;
use pf_core::contact::ContactFields;
use pf_core::ports::{EmailReceipt, EmailSendError, EmailSenderPort};

pub const SEND_PATH: &str = "/api/v1.0/email/send";

#[cfg(not(target_arch = "wasm32"))]
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

#[derive(Debug, thiserror::Error)]
pub enum EmailClientError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    nome: &'a str,
    email: &'a str,
    messaggio: &'a str,
}

pub struct EmailJsClient {
    http: reqwest::Client,
    endpoint: String,
    service_id: String,
    template_id: String,
    public_key: String,
}

impl EmailJsClient {
    pub fn new(config: &EmailConfig) -> Result<Self, EmailClientError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(REQUEST_TIMEOUT);
        Ok(Self::with_client(builder.build()?, config))
    }

    pub fn with_client(http: reqwest::Client, config: &EmailConfig) -> Self {
        Self {
            http,
            endpoint: format!("{}{}", config.api_base.trim_end_matches('/'), SEND_PATH),
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl EmailSenderPort for EmailJsClient {
    async fn send(&self, fields: &ContactFields) -> Result<EmailReceipt, EmailSendError> {
        let body = SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: TemplateParams {
                nome: &fields.name,
                email: &fields.email,
                messaggio: &fields.message,
            },
        };

        debug!(endpoint = %self.endpoint, "sending contact message");
        let response = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if status.is_success() {
            Ok(EmailReceipt { text })
        } else {
            warn!(status = status.as_u16(), "email provider rejected message");
            Err(EmailSendError::Rejected {
                status: status.as_u16(),
                body: text,
            })
        }
    }
}

fn transport_error(error: reqwest::Error) -> EmailSendError {
    EmailSendError::Transport(error.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        let config = EmailConfig {
            api_base: "https://api.emailjs.com/".into(),
            ..EmailConfig::default()
        };
        let client = EmailJsClient::with_client(reqwest::Client::new(), &config);
        assert_eq!(client.endpoint(), "https://api.emailjs.com/api/v1.0/email/send");
    }

    #[test]
    fn request_body_uses_provider_field_names() {
        let body = SendRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: TemplateParams {
                nome: "Ada",
                email: "ada@example.com",
                messaggio: "Ciao",
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["user_id"], "key");
        assert_eq!(json["template_params"]["nome"], "Ada");
        assert_eq!(json["template_params"]["messaggio"], "Ciao");
    }
}

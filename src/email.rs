use std::time::Duration;

use async_trait::async_trait;
use derive_more::Display;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::email_address::{EmailAddress, Mailbox};

/// An email ready to be handed to the delivery provider.
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    pub from: Mailbox,
    pub to: EmailAddress,
    pub subject: String,
    pub html: String,
}

/// Opaque id the provider assigns to an accepted email.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", _0)]
pub struct DeliveryId(String);

impl DeliveryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for DeliveryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    #[error("the delivery provider rejected the email ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("the delivery provider could not be reached")]
    Transport(#[from] reqwest::Error),
}

/// Something that can deliver an [`OutboundEmail`].
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, email: &OutboundEmail) -> Result<DeliveryId, DeliveryError>;
}

/// Client for a Resend-compatible transactional email API.
#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            authorization_token,
        })
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: String,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

#[async_trait]
impl EmailSender for EmailClient {
    #[tracing::instrument(
        name = "Deliver email through the provider",
        skip(self, email),
        fields(to = %email.to, subject = %email.subject)
    )]
    async fn send_email(&self, email: &OutboundEmail) -> Result<DeliveryId, DeliveryError> {
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: email.from.to_string(),
            to: [email.to.as_ref()],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ProviderError>().await {
                Ok(error) => error.message,
                Err(_) => status.canonical_reason().unwrap_or("unknown").to_owned(),
            };
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let SendEmailResponse { id } = response.json().await?;
        Ok(DeliveryId::new(id))
    }
}

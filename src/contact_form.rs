//! Client side of the contact form: field state, a single-flight submit gate and
//! the notification shown once the request settles.

use serde::{Deserialize, Serialize};

use crate::{
    app::contact::schema::ContactResponseBody,
    app::error::schema::Error as ErrorBody,
    i18n::Language,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

/// The five values the visitor types in, serialized as the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Sending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

/// What the server acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub message: String,
    pub delivery_id: Option<String>,
}

#[derive(thiserror::Error, Debug)]
pub enum SubmitError {
    #[error("the server answered {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("the contact endpoint could not be reached or answered unreadably")]
    Transport(#[from] reqwest::Error),
}

/// HTTP access to the contact endpoint.
#[derive(Clone)]
pub struct ContactApi {
    http_client: reqwest::Client,
    endpoint: String,
}

impl ContactApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// One POST, no retry.
    #[tracing::instrument(name = "Submit contact form", skip(self, fields))]
    pub async fn send(&self, fields: &ContactFields) -> Result<Receipt, SubmitError> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(fields)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => "Error al enviar el mensaje".to_owned(),
            };
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: ContactResponseBody = response.json().await?;
        Ok(Receipt {
            message: body.message,
            delivery_id: body.id,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: ContactFields,
    state: FormState,
    language: Language,
}

impl ContactForm {
    pub fn new(language: Language) -> Self {
        Self {
            fields: ContactFields::default(),
            state: FormState::Idle,
            language,
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.state == FormState::Idle
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    /// Enters `Sending` and hands out the payload. Returns `None` while a request
    /// is already outstanding.
    pub fn begin_submit(&mut self) -> Option<ContactFields> {
        if self.state == FormState::Sending {
            return None;
        }
        self.state = FormState::Sending;
        Some(self.fields.clone())
    }

    /// Leaves `Sending` whatever the outcome. Fields are cleared only on success.
    pub fn settle(&mut self, outcome: Result<Receipt, SubmitError>) -> Notification {
        self.state = FormState::Idle;
        let copy = &self.language.translations().contact.form;

        match outcome {
            Ok(receipt) => {
                tracing::info!(delivery_id = ?receipt.delivery_id, "contact form sent");
                self.fields = ContactFields::default();
                Notification {
                    kind: NotificationKind::Success,
                    title: copy.success,
                    description: copy.success_description,
                }
            }
            Err(e) => {
                tracing::warn!(detail = %e, "contact form submission failed");
                Notification {
                    kind: NotificationKind::Failure,
                    title: copy.error,
                    description: copy.error_description,
                }
            }
        }
    }

    /// Runs one full submission. `None` means the submit was ignored because
    /// another one is in flight.
    pub async fn submit(&mut self, api: &ContactApi) -> Option<Notification> {
        let payload = self.begin_submit()?;
        let outcome = api.send(&payload).await;
        Some(self.settle(outcome))
    }
}

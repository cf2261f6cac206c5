use anyhow::Context;
use askama::Template;
use axum::{body::Bytes, extract::State, Json};
use chrono::{DateTime, Local};

use super::{schema, ContactInbox};
use crate::{
    app::{
        error::{AppError, AppResult},
        AppState,
    },
    domain::contact::ContactSubmission,
    email::OutboundEmail,
};

#[derive(Template)]
#[template(path = "email/contact.html")]
struct ContactEmailTemplate<'a> {
    name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    subject: Option<&'a str>,
    message: &'a str,
    received_at: String,
}

/// Accepts one contact-form submission and forwards it to the business inbox.
///
/// The body is parsed by hand so that a malformed payload is answered with the
/// same JSON error shape as every other failure.
#[tracing::instrument(name = "Send contact message", skip(state, body))]
pub async fn send_message(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<schema::ContactResponseBody>> {
    let body: serde_json::Map<String, serde_json::Value> = serde_json::from_slice(&body)
        .context("The contact request body should be a JSON object.")?;
    let body: schema::ContactRequestBody = serde_json::from_value(serde_json::Value::Object(body))
        .context("Failed to parse the contact request body.")?;
    let submission = ContactSubmission::try_from(body).map_err(AppError::ValidationError)?;

    let email = compose_email(&submission, &state.inbox, Local::now())
        .context("Failed to render the contact email.")?;
    let delivery_id = state.email_client.send_email(&email).await?;

    tracing::info!(%delivery_id, "contact message delivered");
    Ok(Json(schema::ContactResponseBody {
        message: "Mensaje enviado correctamente".to_owned(),
        id: Some(delivery_id.to_string()),
    }))
}

/// Builds the notification email. Every submitted value is HTML-escaped by the template.
pub fn compose_email(
    submission: &ContactSubmission,
    inbox: &ContactInbox,
    received_at: DateTime<Local>,
) -> Result<OutboundEmail, askama::Error> {
    let html = ContactEmailTemplate {
        name: submission.name.as_ref(),
        email: submission.email.as_ref(),
        phone: submission.phone.as_deref(),
        subject: submission.subject.as_deref(),
        message: submission.message.as_ref(),
        received_at: received_at.format("%-d/%-m/%Y, %-H:%M:%S").to_string(),
    }
    .render()?;

    Ok(OutboundEmail {
        from: inbox.sender.clone(),
        to: inbox.recipient.clone(),
        subject: submission.subject_line(),
        html,
    })
}

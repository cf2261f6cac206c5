use axum::{routing::post, Router};

use super::AppState;
use crate::domain::email_address::{EmailAddress, Mailbox};

pub mod route;
pub mod schema;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/contact", post(route::send_message))
}

/// Fixed addressing for contact-form emails.
#[derive(Debug, Clone)]
pub struct ContactInbox {
    pub sender: Mailbox,
    pub recipient: EmailAddress,
}

use std::{io, sync::Arc};

use anyhow::Context;
use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};

use self::contact::ContactInbox;
use crate::{
    config::Settings,
    email::{EmailClient, EmailSender},
};

pub mod contact;
pub mod error;
mod health;
mod home;
mod not_found;

#[derive(Clone)]
pub struct AppState {
    email_client: Arc<dyn EmailSender>,
    inbox: Arc<ContactInbox>,
    base_url: Arc<str>,
}

impl AppState {
    pub fn new(email_client: Arc<dyn EmailSender>, inbox: ContactInbox) -> Self {
        Self {
            email_client,
            inbox: Arc::new(inbox),
            base_url: Arc::from(""),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<Arc<str>>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn app_router() -> Router<AppState> {
    health::router()
        .merge(contact::router())
        .merge(home::router())
        .nest_service("/assets", ServeDir::new("assets"))
        .fallback(not_found::not_found_page)
}

pub fn router(state: AppState) -> Router {
    app_router().with_state(state).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            let id = uuid::Uuid::new_v4();
            tracing::info_span!(
                "request",
                method = ?request.method(),
                uri = ?request.uri(),
                %id,
            )
        }),
    )
}

pub struct App {
    listener: TcpListener,
    port: u16,
    state: AppState,
}

impl App {
    pub async fn with(config: &Settings) -> anyhow::Result<Self> {
        let email_client = EmailClient::new(
            config.email_client.base_url.clone(),
            config.email_client.authorization_token.clone(),
            config.email_client.timeout(),
        )
        .context("The email client should be buildable.")?;

        let inbox = ContactInbox {
            sender: config
                .contact
                .sender()
                .map_err(anyhow::Error::msg)
                .context("The configured sender should be valid.")?,
            recipient: config
                .contact
                .recipient()
                .map_err(anyhow::Error::msg)
                .context("The configured recipient should be valid.")?,
        };

        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await
        .context("The listener should be able to bind the address.")?;
        let port = listener.local_addr()?.port();

        Ok(Self {
            listener,
            port,
            state: AppState::new(Arc::new(email_client), inbox)
                .with_base_url(config.application.base_url.as_str()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        axum::serve(self.listener, router(self.state).into_make_service()).await
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::email::DeliveryError;

pub mod schema;

/// Result alias for handlers that fail with an [`AppError`].
pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type that can be used throughout the API.
///
/// Can be returned in a `Result` from an API handler function.
///
/// Each variant maps to a status code and a fixed, human-readable message in a
/// `{"error": ...}` JSON body. The underlying detail is only ever logged.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("the email could not be delivered")]
    DeliveryError(#[from] DeliveryError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DeliveryError(_) | Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => "Todos los campos son requeridos",
            Self::DeliveryError(_) => "Error al enviar el mensaje",
            Self::UnexpectedError(_) => "Error interno del servidor",
        }
    }
}

/// Axum allows you to return `Result` from handler functions, but the error type
/// also must be some sort of response type.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(ref s) => tracing::warn!(detail = %s, "rejected request"),
            Self::DeliveryError(ref e) => tracing::error!(detail = ?e, "failed to deliver email"),
            Self::UnexpectedError(ref e) => tracing::error!(detail = ?e, "unexpected error"),
        }

        (
            self.status_code(),
            Json(schema::Error {
                error: self.public_message().to_owned(),
            }),
        )
            .into_response()
    }
}

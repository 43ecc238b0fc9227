//! Unified error handling for the server.
//!
//! Every API error renders as `{"message": "..."}` JSON. Internal failures
//! are logged with their full cause and answered with a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::media::MediaError;
use crate::services::AuthError;
use crate::store::StoreError;

/// JSON body carried by every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application-level error type for the backend.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Session read or write failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Account operation failed; status depends on the kind.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Upload rejected or multipart body malformed.
    #[error(transparent)]
    Media(#[from] MediaError),

    /// Resource not found. The message is returned to the client verbatim.
    #[error("{0}")]
    NotFound(String),

    /// Request lacks an authenticated admin session.
    #[error("Unauthorized")]
    Unauthorized,

    /// Bad request from client. The message is returned verbatim.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Store(_) | Self::Session(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) | Self::Media(_) => StatusCode::BAD_REQUEST,
            Self::Auth(e) => match e {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::AdminNotFound => StatusCode::NOT_FOUND,
                AuthError::Store(_) | AuthError::PasswordHash => StatusCode::INTERNAL_SERVER_ERROR,
                AuthError::InvalidUsername(_)
                | AuthError::UsernameTaken
                | AuthError::WeakPassword(_)
                | AuthError::SelfDelete
                | AuthError::LastAdmin => StatusCode::BAD_REQUEST,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't expose internal error details to clients
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
            "Server error".to_owned()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Application error taxonomy.
///
/// Every fallible path in services and extractors returns one of these
/// kinds; the [`IntoResponse`] impl below is the only place they are
/// mapped to HTTP status codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed client input.
    #[error("{0}")]
    Validation(String),

    /// The requested state already exists (duplicate email, duplicate
    /// favorite). No retry will help.
    #[error("{0}")]
    Conflict(String),

    /// An admin tried to change or delete their own account.
    #[error("{0}")]
    SelfModificationForbidden(String),

    /// No credential was supplied on a route that requires one.
    #[error("{0}")]
    Unauthenticated(String),

    /// Login rejected. A single generic kind for both unknown email and
    /// wrong password so responses cannot be used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// A bearer token was supplied but failed verification.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// Authenticated, but the role does not permit the operation.
    #[error("{0}")]
    Forbidden(String),

    /// The referenced entity does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected store or runtime failure. Logged, never leaked.
    #[error("Something went wrong")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) | Self::SelfModificationForbidden(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated(_) | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidToken | Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            error!(error = %err, "Unhandled internal error");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (self.status(), body).into_response()
    }
}

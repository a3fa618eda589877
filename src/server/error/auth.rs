use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login with an unknown email or a password that does not match the stored hash.
    ///
    /// Both cases share one variant so a client cannot probe which emails are registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup with an email that already belongs to an account.
    #[error("Email already exists")]
    DuplicateEmail,

    /// A protected operation was called without a valid access token.
    #[error("Authentication required")]
    Unauthorized,

    /// The caller is authenticated but lacks the role the operation requires.
    #[error("User {0} lacks the required role")]
    AccessDenied(String),

    /// Token could not be decoded or its signature did not verify.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Signing a new token failed.
    #[error("Failed to encode token: {0}")]
    TokenEncoding(String),

    /// Hashing a password or parsing a stored hash failed.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `InvalidCredentials` / `Unauthorized` / `InvalidToken` → 401 Unauthorized
/// - `DuplicateEmail` → 400 Bad Request
/// - `AccessDenied` → 403 Forbidden
/// - `TokenEncoding` / `PasswordHash` → 500 Internal Server Error with a generic message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::Unauthorized | Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                "Authentication required".to_string(),
            ),
            Self::DuplicateEmail => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::AccessDenied(_) => {
                tracing::debug!("{}", self);
                (StatusCode::FORBIDDEN, "Access denied".to_string())
            }
            Self::TokenEncoding(_) | Self::PasswordHash(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}

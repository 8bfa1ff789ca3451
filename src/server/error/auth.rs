use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token in the Authorization header (or `?token=` for the
    /// realtime socket). Results in 401 Unauthorized.
    #[error("Missing authentication token")]
    MissingToken,

    /// Token failed signature validation or carries the wrong token kind
    /// (e.g. a refresh token presented as an access token). Results in
    /// 401 Unauthorized.
    #[error("Invalid authentication token")]
    InvalidToken,

    /// Token is past its expiry. Results in 401 Unauthorized.
    #[error("Authentication token expired")]
    TokenExpired,

    /// Token was valid but the user row no longer exists.
    ///
    /// Results in 401 Unauthorized; the token references a deleted account.
    #[error("User {0} from token not found in database")]
    UserNotFound(i64),

    /// Account is deactivated. Results in 403 Forbidden.
    #[error("Account for user {0} is deactivated")]
    AccountDisabled(i64),

    /// Email/password pair did not authenticate. Results in 401 Unauthorized
    /// with a message that does not distinguish unknown email from wrong
    /// password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated user attempted to act on a resource they do not own.
    ///
    /// Results in 403 Forbidden. The detail string is logged, not returned.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i64, String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken | Self::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::TokenExpired => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Token expired".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::AccountDisabled(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Account is deactivated".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid credentials".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(user_id, detail) => {
                tracing::debug!("Access denied for user {}: {}", user_id, detail);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Access denied".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token failed signature, format or expiry checks.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Login attempted with an unknown email or a wrong password.
    ///
    /// Both cases share one variant so responses do not reveal which emails exist.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token was valid but its user no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// User attempted to act on a water log they do not own.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} attempted to access water log {log_id} owned by another user")]
    AccessDenied {
        /// ID of the user making the request
        user_id: i32,
        /// ID of the log that was targeted
        log_id: i32,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing token or invalid credentials
/// - 403 Forbidden - Invalid token or access to another user's resource
/// - 404 Not Found - Token user no longer exists
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication token required"),
            Self::InvalidToken(_) => (StatusCode::FORBIDDEN, "Invalid token"),
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                "You do not have permission to modify this water log",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

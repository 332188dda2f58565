use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header, or a refresh request missing a token.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature, format or `token_type` claim is invalid.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Access token is well-formed but past its `exp` claim.
    #[error("Access token expired")]
    TokenExpired,

    /// Refresh token failed verification with the refresh secret.
    #[error("Invalid refresh token: {0}")]
    InvalidRefreshToken(String),

    /// Access and refresh tokens were issued to different users.
    #[error("Token subjects do not match: access {0}, refresh {1}")]
    TokenMismatch(i32, i32),

    /// Token subject no longer maps to a visible user.
    #[error("User {0} from token no longer exists")]
    UserNotFound(i32),

    /// Authenticated user lacks the required permission.
    ///
    /// # Fields
    /// - User id
    /// - Reason, logged but not sent to the client
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email, deleted account or wrong password on login.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account has no password hash and cannot log in with one.
    #[error("Account {0} has no password set")]
    PasswordNotSet(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Token problems map to 401 Unauthorized, failed permission checks to 403
/// Forbidden and login failures to 400 Bad Request. Details such as user ids
/// and decode errors are logged at debug level and kept out of the response.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Missing bearer token"),
            Self::InvalidToken(_) => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Self::TokenExpired => (StatusCode::UNAUTHORIZED, "Token expired"),
            Self::InvalidRefreshToken(_) => (
                StatusCode::UNAUTHORIZED,
                "Refresh token is invalid or expired",
            ),
            Self::TokenMismatch(_, _) => (StatusCode::UNAUTHORIZED, "Invalid token pair"),
            Self::UserNotFound(_) => (StatusCode::UNAUTHORIZED, "User no longer exists"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action",
            ),
            Self::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid email or password"),
            Self::PasswordNotSet(_) => (
                StatusCode::BAD_REQUEST,
                "This account does not support password login",
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

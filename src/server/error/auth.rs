use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No username was supplied to the authentication endpoint.
    #[error("Authentication requires a username")]
    InvalidCredentials,

    /// The request carries no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature, issuer, audience, or lifetime validation.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// The token is valid but its `city` claim does not satisfy the city policy.
    #[error("User from city '{actual}' attempted to access a resource restricted to '{required}'")]
    AccessDenied {
        /// City required by the policy
        required: String,
        /// City claimed by the token
        actual: String,
    },

    /// Signing a freshly issued token failed.
    #[error("Failed to create token: {0}")]
    TokenCreation(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For bad credentials and missing/invalid/expired tokens
/// - 403 Forbidden - For tokens rejected by the city policy
/// - 500 Internal Server Error - For token signing failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::InvalidCredentials | Self::MissingToken | Self::InvalidToken(_) => {
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
            Self::AccessDenied { .. } => (StatusCode::FORBIDDEN, "Forbidden"),
            Self::TokenCreation(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
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

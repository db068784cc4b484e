use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was presented on a guarded route.
    #[error("No bearer token in request")]
    MissingToken,

    /// The presented token is malformed, expired or carries a bad signature.
    ///
    /// The three failure modes collapse to this single variant; the caller is
    /// never told which one occurred.
    #[error("Token rejected")]
    InvalidToken,

    /// The token was valid but its subject no longer matches a user row.
    #[error("No user record for token subject {0}")]
    UnknownUser(String),

    /// The caller is authenticated but their role does not grant the route.
    #[error("User {0} lacks the required role")]
    AccessDenied(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Every failure to establish an identity answers 401 with the same message;
/// only a role mismatch on an established identity answers 403. Details are
/// logged at debug level and kept out of the response.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth failure: {}", self);

        match self {
            Self::MissingToken | Self::InvalidToken | Self::UnknownUser(_) => {
                error_response(StatusCode::UNAUTHORIZED, "No autenticado".to_string(), None)
            }
            Self::AccessDenied(_) => {
                error_response(StatusCode::FORBIDDEN, "Acceso denegado".to_string(), None)
            }
        }
    }
}

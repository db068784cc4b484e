//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into HTTP responses. The `AppError` enum is the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Error responses do not serialize their body here: `IntoResponse` attaches
//! an [`ErrorBody`] extension to a bodyless response, and the
//! `middleware::error_body` layer renders the structured JSON error shape
//! (timestamp, status, label, message, path) once the request path is known.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{auth::AuthError, config::ConfigError};

/// Error payload attached to a response as an extension.
///
/// Carries the parts of the structured error body that the failing handler
/// knows; the response-mapping middleware adds timestamp, status label and
/// request path when it renders the final JSON.
#[derive(Debug, Clone)]
pub struct ErrorBody {
    pub message: String,
    /// Per-field messages, present for validation and constraint errors.
    pub errors: Option<Vec<String>>,
}

/// Builds a bodyless response with the given status and an [`ErrorBody`]
/// extension for the error-mapping middleware to render.
pub(crate) fn error_response(
    status: StatusCode,
    message: String,
    errors: Option<Vec<String>>,
) -> Response {
    let mut response = status.into_response();
    response.extensions_mut().insert(ErrorBody { message, errors });
    response
}

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for
/// automatic conversion; `AuthError` handles its own response mapping.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping
    /// (401 Unauthorized / 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Constraint violations map to 400 Bad Request with the offending
    /// constraint listed; everything else is a 500 with details logged
    /// server-side only.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A requested entity ID has no matching row.
    ///
    /// Results in 404 Not Found naming the resource type and ID, in the
    /// message format the platform's clients already parse.
    #[error("No se ha encontrado {resource} con id {id}")]
    NotFound { resource: &'static str, id: i32 },

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Malformed or missing required request fields.
    ///
    /// Results in 400 Bad Request carrying the per-field messages.
    #[error("Datos de entrada no válidos")]
    Validation(Vec<String>),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Not-found error for a resource type and the ID that missed.
    pub fn not_found(resource: &'static str, id: i32) -> Self {
        Self::NotFound { resource, id }
    }
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to a status code and attaches the error payload
/// as an [`ErrorBody`] extension. Internal errors are logged with full
/// details but the client only sees a generic message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound { resource, id } => error_response(
                StatusCode::NOT_FOUND,
                format!("No se ha encontrado {} con id {}", resource, id),
                None,
            ),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg, None),
            Self::Validation(errors) => error_response(
                StatusCode::BAD_REQUEST,
                "Datos de entrada no válidos".to_string(),
                Some(errors),
            ),
            Self::DbErr(err) => {
                let detail = err.to_string();
                if detail.contains("FOREIGN KEY constraint")
                    || detail.contains("UNIQUE constraint")
                    || detail.contains("CHECK constraint")
                {
                    error_response(
                        StatusCode::BAD_REQUEST,
                        "La operación viola una restricción de datos".to_string(),
                        Some(vec![detail]),
                    )
                } else {
                    tracing::error!("Database error: {}", detail);
                    internal_error_response()
                }
            }
            Self::ConfigErr(err) => {
                tracing::error!("Configuration error: {}", err);
                internal_error_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error_response()
            }
        }
    }
}

fn internal_error_response() -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Ha ocurrido un error interno".to_string(),
        None,
    )
}

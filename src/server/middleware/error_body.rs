//! Response-mapping middleware for the structured error body.
//!
//! Failed handlers answer with a bare status and an [`ErrorBody`] extension;
//! this layer renders the final JSON once the request path is known, keeping
//! the per-request context explicit instead of thread-bound. Error statuses
//! with neither an extension nor a body (the router's own 404/405) are
//! synthesized into the same shape. Error statuses that carry their own body
//! pass through untouched; the all-null login response relies on that.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};

use crate::{model::api::ErrorDto, server::error::ErrorBody};

pub async fn attach(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let (mut parts, body) = response.into_parts();

    if let Some(error_body) = parts.extensions.remove::<ErrorBody>() {
        return render(status, error_body.message, error_body.errors, &path);
    }

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return render(status, reason(status).to_string(), None, &path);
        }
    };

    if bytes.is_empty() {
        return render(status, reason(status).to_string(), None, &path);
    }

    Response::from_parts(parts, Body::from(bytes))
}

fn render(
    status: StatusCode,
    message: String,
    errors: Option<Vec<String>>,
    path: &str,
) -> Response {
    let dto = ErrorDto {
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        status: status.as_u16(),
        error: reason(status).to_string(),
        message,
        path: path.to_string(),
        errors,
    };

    (status, Json(dto)).into_response()
}

fn reason(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Error")
}

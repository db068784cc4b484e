use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Structured error body returned for every failed request.
///
/// Mirrors the error shape the platform's clients already consume:
/// timestamp, numeric status, short status label, human-readable message and
/// the request path. Validation failures additionally list per-field
/// messages under `errors`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Plain confirmation message for operations without a data payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

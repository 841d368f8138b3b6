use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Request-level failures surfaced to API clients.
///
/// Validation problems map to 400 with a machine-readable body; anything
/// unexpected maps to 500 with a generic message. Requests are idempotent
/// and cheap, so no retry machinery exists on either side.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Validation errors")]
    Validation(Vec<String>),

    #[error("No image provided")]
    MissingImage,

    #[error("Invalid file type. Please upload an image.")]
    InvalidImage,

    #[error("No messages provided")]
    EmptyChat,

    /// Unexpected internal failure; the argument names the operation for
    /// the generic "Failed to process ..." message.
    #[error("Failed to process {0}")]
    Internal(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        let body = match &self {
            ApiError::Validation(details) => json!({
                "error": "Validation errors",
                "details": details,
            }),
            other => json!({ "error": other.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

/// Flatten a garde report into the documented constraint strings.
pub fn validation_details(report: &garde::Report) -> Vec<String> {
    report.iter().map(|(_, err)| err.to_string()).collect()
}

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roomsheet_core::error::CoreError;
use roomsheet_core::wire::{ErrorBody, ERROR_MISSING_FIELDS};

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the `{ success: false, ... }`
/// JSON envelope for every failure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roomsheet_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::MissingFields { fields } => (
                    StatusCode::BAD_REQUEST,
                    ERROR_MISSING_FIELDS.to_string(),
                    "MISSING_FIELDS",
                    format!(
                        "baseImage, hotspotName, and selectedSheet are required (missing: {})",
                        fields.join(", ")
                    ),
                ),
                CoreError::NotFound { entity, path } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} not found"),
                    "NOT_FOUND",
                    format!("File not found: {path}"),
                ),
                CoreError::UnknownHotspot(name) => (
                    StatusCode::BAD_REQUEST,
                    "Unknown hotspot".to_string(),
                    "UNKNOWN_HOTSPOT",
                    format!("Unknown hotspot: {name}"),
                ),
                CoreError::ImageDecode(msg) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Unreadable image".to_string(),
                    "IMAGE_DECODE_ERROR",
                    msg.clone(),
                ),
                CoreError::Validation(msg) => (
                    StatusCode::BAD_REQUEST,
                    "Invalid request".to_string(),
                    "VALIDATION_ERROR",
                    msg.clone(),
                ),
                CoreError::StorageWrite(msg) => {
                    tracing::error!(error = %msg, "Overlay storage error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Storage error".to_string(),
                        "STORAGE_WRITE_ERROR",
                        "Failed to store the generated overlay".to_string(),
                    )
                }
                CoreError::Internal(msg) => internal(msg),
            },

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                "Bad request".to_string(),
                "BAD_REQUEST",
                msg.clone(),
            ),
            AppError::InternalError(msg) => internal(msg),
        };

        let body = ErrorBody {
            success: false,
            error,
            code: code.to_string(),
            message,
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal(msg: &str) -> (StatusCode, String, &'static str, String) {
    tracing::error!(error = %msg, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Panic handler for `CatchPanicLayer`: answer with the standard 500 envelope.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());
    AppError::InternalError(format!("Handler panicked: {detail}")).into_response()
}

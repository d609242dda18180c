use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use polypdf_core::error::CoreError;
use polypdf_export::error::ExportError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Deployment problem the operator must fix; the message is returned as-is.
    Misconfigured(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match self {
            ApiError::Misconfigured(msg) => {
                tracing::error!("misconfigured: {msg}");
                msg
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                "internal server error".to_string()
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::LocaleNotFound(locale) => {
                ApiError::Misconfigured(format!("default locale `{locale}` is not available"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        match e {
            ExportError::TemplateNotFound(name) => {
                ApiError::Misconfigured(format!("template `{name}` is not available"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

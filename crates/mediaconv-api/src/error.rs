//! HTTP error response conversion
//!
//! This module provides HTTP-specific error response conversion for AppError.
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that implement `Into<AppError>`) for errors so they
//! become `HttpAppError` and render consistently (status, plain-text body,
//! logging). Response bodies are deliberately plain text: the endpoint is
//! consumed by a plain HTML form, not an API client expecting JSON envelopes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mediaconv_core::{AppError, ErrorMetadata, LogLevel};
use mediaconv_processing::ConvertError;

/// Wrapper type for AppError to implement IntoResponse.
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from mediaconv-core).
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        })
    }
}

// Convert domain errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)

impl From<ConvertError> for HttpAppError {
    fn from(err: ConvertError) -> Self {
        let app = match err {
            ConvertError::Failed { diagnostic, .. } => AppError::Conversion { diagnostic },
            ConvertError::Spawn(source) => {
                AppError::Internal(format!("failed to run converter: {}", source))
            }
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let error_type = error.error_type();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_type = error_type, "Error occurred");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Full detail (converter stderr included) goes to the log only.
        log_error(app_error);

        (status, app_error.client_message()).into_response()
    }
}

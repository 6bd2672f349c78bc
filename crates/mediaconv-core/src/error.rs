//! Error types module
//!
//! All request-level failures are unified under the [`AppError`] enum. Each
//! variant carries enough context for server-side logging while the
//! client-facing message is produced separately through [`ErrorMetadata`],
//! so converter diagnostics and filesystem detail never leak into responses.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented.
/// This trait allows errors to self-describe their HTTP response characteristics.
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "CONVERSION_FAILED")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("request is missing the 'file' part")]
    MissingFilePart,

    #[error("file part carries no filename")]
    NoFileSelected,

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("conversion failed: {diagnostic}")]
    Conversion { diagnostic: String },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata for each variant: (http_status, error_code, log_level).
/// client_message stays per-variant for dynamic content.
fn app_error_static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::MissingFilePart => (400, "MISSING_FILE_PART", LogLevel::Debug),
        AppError::NoFileSelected => (400, "NO_FILE_SELECTED", LogLevel::Debug),
        AppError::InvalidRequest(_) => (400, "INVALID_REQUEST", LogLevel::Debug),
        AppError::Conversion { .. } => (500, "CONVERSION_FAILED", LogLevel::Error),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl AppError {
    /// Get the error type name for logging
    pub fn error_type(&self) -> &str {
        match self {
            AppError::MissingFilePart => "MissingFilePart",
            AppError::NoFileSelected => "NoFileSelected",
            AppError::InvalidRequest(_) => "InvalidRequest",
            AppError::Conversion { .. } => "Conversion",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn error_code(&self) -> &'static str {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::MissingFilePart => "No file part".to_string(),
            AppError::NoFileSelected => "No selected file".to_string(),
            AppError::InvalidRequest(_) => "Invalid request".to_string(),
            // Generic on purpose: converter diagnostics often contain local paths.
            AppError::Conversion { .. } => {
                "Conversion failed. The file might be corrupt or the format not supported."
                    .to_string()
            }
            AppError::Internal(msg) => format!("An error occurred: {}", msg),
            AppError::InternalWithSource { message, .. } => {
                format!("An error occurred: {}", message)
            }
        }
    }
}

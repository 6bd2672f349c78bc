//! Common utilities for the convert endpoint: multipart extraction and
//! download-filename derivation.

use axum::extract::Multipart;
use bytes::Bytes;
use mediaconv_core::AppError;
use std::path::Path;

/// One uploaded file as it arrived in the multipart body.
pub struct UploadedFile {
    pub data: Bytes,
    /// Filename as sent by the client; `Some("")` when a browser submits an
    /// empty file input.
    pub filename: Option<String>,
}

/// The two fields the convert endpoint understands. Presence is checked by
/// the handler so the distinct 400 reasons stay in one place.
pub struct ConversionForm {
    pub file: Option<UploadedFile>,
    pub format: Option<String>,
}

/// Extract the `file` and `format` fields from a multipart form.
/// Unknown fields are skipped; read failures surface as invalid requests.
pub async fn extract_conversion_form(mut multipart: Multipart) -> Result<ConversionForm, AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut format: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidRequest(format!("failed to read multipart body: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "file" => {
                let filename = field.file_name().map(|s: &str| s.to_string());
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidRequest(format!("failed to read file data: {}", e))
                })?;
                file = Some(UploadedFile { data, filename });
            }
            "format" => {
                let value = field.text().await.map_err(|e| {
                    AppError::InvalidRequest(format!("failed to read format field: {}", e))
                })?;
                format = Some(value);
            }
            _ => {}
        }
    }

    Ok(ConversionForm { file, format })
}

/// Download name offered to the client: `converted_{stem}.{format}` where
/// `stem` is the original filename without its final extension.
pub fn download_filename(original_filename: &str, target_format: &str) -> String {
    let stem = Path::new(original_filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(original_filename);
    format!("converted_{}.{}", stem, target_format)
}

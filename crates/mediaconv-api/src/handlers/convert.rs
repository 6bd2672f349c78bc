//! Conversion endpoint: stage the upload, run the converter, return the
//! result, clean up.

use crate::error::HttpAppError;
use crate::state::AppState;
use crate::utils::upload::{download_filename, extract_conversion_form};
use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::Response,
};
use mediaconv_core::AppError;
use std::sync::Arc;

#[utoipa::path(
    post,
    path = "/convert",
    tag = "convert",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Converted file returned as an attachment", content_type = "application/octet-stream"),
        (status = 400, description = "Missing file part, empty filename, or missing format", content_type = "text/plain"),
        (status = 500, description = "Conversion failure or internal error", content_type = "text/plain")
    )
)]
#[tracing::instrument(skip(state, multipart), fields(operation = "convert"))]
pub async fn convert_file(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    let form = extract_conversion_form(multipart).await?;

    let file = form.file.ok_or(AppError::MissingFilePart)?;
    let original_filename = match file.filename {
        Some(name) if !name.is_empty() => name,
        _ => return Err(AppError::NoFileSelected.into()),
    };
    let target_format = match form.format {
        Some(format) if !format.is_empty() => format,
        _ => return Err(AppError::InvalidRequest("missing target format".to_string()).into()),
    };

    // TODO: validate `target_format` against an allowlist; the token lands
    // verbatim in the output filename and the converter argument list.
    let staged = state.staging.stage(&original_filename, &target_format);
    tracing::debug!(
        id = %staged.id(),
        original_filename = %original_filename,
        target_format = %target_format,
        "Staging upload"
    );

    tokio::fs::write(staged.input(), &file.data)
        .await
        .map_err(|e| AppError::Internal(format!("failed to stage upload: {}", e)))?;

    // Blocks this request until the child process exits; `staged` drops on
    // every exit path below, removing both temp files.
    state
        .converter
        .convert(staged.input(), staged.output())
        .await?;

    let converted = tokio::fs::read(staged.output())
        .await
        .map_err(|e| AppError::Internal(format!("failed to read converted output: {}", e)))?;

    let download_name = download_filename(&original_filename, &target_format);
    let content_type = mime_guess::from_path(&download_name).first_or_octet_stream();

    tracing::info!(
        id = %staged.id(),
        download_name = %download_name,
        size_bytes = converted.len(),
        "Conversion succeeded"
    );

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type.as_ref())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", download_name),
        )
        .body(Body::from(converted))
        .map_err(|e| AppError::Internal(format!("failed to build response: {}", e)))?;

    Ok(response)
}

mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use helpers::{setup_test_app, FailingConverter, StubConverter};
use std::sync::Arc;

#[tokio::test]
async fn test_missing_file_part() {
    let app = setup_test_app(Arc::new(StubConverter));

    let form = MultipartForm::new().add_text("format", "mp3");
    let response = app.client().post("/convert").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No file part");
}

#[tokio::test]
async fn test_empty_filename() {
    let app = setup_test_app(Arc::new(StubConverter));

    let form = MultipartForm::new()
        .add_text("format", "mp3")
        .add_part("file", Part::bytes(b"some audio".to_vec()).file_name(""));
    let response = app.client().post("/convert").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No selected file");
}

#[tokio::test]
async fn test_missing_format() {
    let app = setup_test_app(Arc::new(StubConverter));

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"some audio".to_vec()).file_name("song.wav"),
    );
    let response = app.client().post("/convert").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid request");
}

#[tokio::test]
async fn test_empty_format() {
    let app = setup_test_app(Arc::new(StubConverter));

    let form = MultipartForm::new()
        .add_text("format", "")
        .add_part(
            "file",
            Part::bytes(b"some audio".to_vec()).file_name("song.wav"),
        );
    let response = app.client().post("/convert").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "Invalid request");
}

#[tokio::test]
async fn test_successful_conversion_round_trip() {
    let app = setup_test_app(Arc::new(StubConverter));

    let form = MultipartForm::new()
        .add_text("format", "png")
        .add_part(
            "file",
            Part::bytes(b"tiff bytes".to_vec())
                .file_name("photo.tiff")
                .mime_type("image/tiff"),
        );
    let response = app.client().post("/convert").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!response.as_bytes().is_empty());
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"converted_photo.png\""
    );
    assert_eq!(response.header("content-type"), "image/png");
    assert_eq!(&response.as_bytes()[..], &b"converted:tiff bytes"[..]);
}

#[tokio::test]
async fn test_download_name_for_extensionless_upload() {
    let app = setup_test_app(Arc::new(StubConverter));

    let form = MultipartForm::new()
        .add_text("format", "txt")
        .add_part("file", Part::bytes(b"plain text".to_vec()).file_name("README"));
    let response = app.client().post("/convert").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("content-disposition"),
        "attachment; filename=\"converted_README.txt\""
    );
}

#[tokio::test]
async fn test_temp_files_removed_after_success() {
    let app = setup_test_app(Arc::new(StubConverter));

    let form = MultipartForm::new()
        .add_text("format", "mp3")
        .add_part(
            "file",
            Part::bytes(b"some audio".to_vec()).file_name("song.wav"),
        );
    let response = app.client().post("/convert").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(app.staged_file_count(), 0);
}

#[tokio::test]
async fn test_converter_failure_returns_generic_500() {
    let app = setup_test_app(Arc::new(FailingConverter));

    let form = MultipartForm::new()
        .add_text("format", "mp4")
        .add_part(
            "file",
            Part::bytes(b"broken video".to_vec()).file_name("clip.avi"),
        );
    let response = app.client().post("/convert").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.text(),
        "Conversion failed. The file might be corrupt or the format not supported."
    );
    // The ffmpeg diagnostic stays server-side.
    assert!(!response.text().contains("Invalid data found"));
}

#[tokio::test]
async fn test_temp_files_removed_after_failure() {
    let app = setup_test_app(Arc::new(FailingConverter));

    let form = MultipartForm::new()
        .add_text("format", "mp4")
        .add_part(
            "file",
            Part::bytes(b"broken video".to_vec()).file_name("clip.avi"),
        );
    let response = app.client().post("/convert").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(app.staged_file_count(), 0);
}

#[tokio::test]
async fn test_index_serves_upload_form() {
    let app = setup_test_app(Arc::new(StubConverter));

    let response = app.client().get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("convertForm"));
}

#[tokio::test]
async fn test_health_is_alive() {
    let app = setup_test_app(Arc::new(StubConverter));

    let response = app.client().get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let data: serde_json::Value = response.json();
    assert_eq!(data["status"], "alive");
}

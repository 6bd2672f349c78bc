//! Shared test setup: a test server wired to temp staging directories and a
//! stub converter, so no real ffmpeg is needed.

use async_trait::async_trait;
use axum_test::TestServer;
use mediaconv_api::state::AppState;
use mediaconv_core::{Config, ServiceConfig};
use mediaconv_processing::{ConvertError, Converter, StagingArea};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Converter stub that "transcodes" by copying the input to the output with
/// a marker prefix, mimicking a zero-exit ffmpeg run.
pub struct StubConverter;

#[async_trait]
impl Converter for StubConverter {
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        let data = tokio::fs::read(input).await.map_err(ConvertError::Spawn)?;
        let mut converted = b"converted:".to_vec();
        converted.extend_from_slice(&data);
        tokio::fs::write(output, converted)
            .await
            .map_err(ConvertError::Spawn)?;
        Ok(())
    }
}

/// Converter stub that mimics ffmpeg exiting 1 with diagnostics on stderr.
pub struct FailingConverter;

#[async_trait]
impl Converter for FailingConverter {
    async fn convert(&self, _input: &Path, _output: &Path) -> Result<(), ConvertError> {
        Err(ConvertError::Failed {
            status: 1,
            diagnostic: "Invalid data found when processing input".to_string(),
        })
    }
}

/// Test application state
pub struct TestApp {
    pub server: TestServer,
    pub upload_dir: TempDir,
    pub converted_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn staged_file_count(&self) -> usize {
        dir_entry_count(self.upload_dir.path()) + dir_entry_count(self.converted_dir.path())
    }
}

fn dir_entry_count(path: &Path) -> usize {
    std::fs::read_dir(path).expect("read_dir").count()
}

/// Setup a test application with isolated staging directories and the given
/// converter implementation.
pub fn setup_test_app(converter: Arc<dyn Converter>) -> TestApp {
    let upload_dir = tempfile::tempdir().expect("Failed to create upload temp dir");
    let converted_dir = tempfile::tempdir().expect("Failed to create converted temp dir");

    let config = Config(Box::new(ServiceConfig {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        upload_dir: upload_dir.path().to_string_lossy().into_owned(),
        converted_dir: converted_dir.path().to_string_lossy().into_owned(),
        ffmpeg_path: "ffmpeg".to_string(),
        max_file_size_bytes: 16 * 1024 * 1024,
    }));

    let staging = StagingArea::from_config(&config);

    let state = Arc::new(AppState {
        config: config.clone(),
        staging: Arc::new(staging),
        converter,
    });

    let router = mediaconv_api::setup::routes::build_router(&config, state);
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        upload_dir,
        converted_dir,
    }
}

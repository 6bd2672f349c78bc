//! Converter capability - external transcoding behind a trait seam

use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The converter ran and exited non-zero. `diagnostic` holds its captured
    /// error stream; it may contain local paths and must not reach clients.
    #[error("converter exited with status {status}: {diagnostic}")]
    Failed { status: i32, diagnostic: String },

    /// The converter process could not be started at all.
    #[error("failed to run converter: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Capability interface for format transcoding. The argument list and
/// process spawning are implementation details behind this trait.
#[async_trait]
pub trait Converter: Send + Sync {
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError>;
}

/// Converter backed by an ffmpeg child process.
pub struct FfmpegConverter {
    ffmpeg_path: String,
}

impl FfmpegConverter {
    pub fn new(ffmpeg_path: impl Into<String>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }
}

#[async_trait]
impl Converter for FfmpegConverter {
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConvertError> {
        tracing::debug!(
            input = %input.display(),
            output = %output.display(),
            "Running ffmpeg"
        );

        // Output format is inferred by ffmpeg from the output path's
        // extension; -y overwrites a pre-existing output file.
        let result = Command::new(&self.ffmpeg_path)
            .arg("-i")
            .arg(input)
            .arg("-y")
            .arg(output)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(ConvertError::Spawn)?;

        if !result.status.success() {
            let diagnostic = String::from_utf8_lossy(&result.stderr).into_owned();
            return Err(ConvertError::Failed {
                status: result.status.code().unwrap_or(-1),
                diagnostic,
            });
        }

        Ok(())
    }
}

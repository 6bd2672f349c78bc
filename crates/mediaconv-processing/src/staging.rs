//! Per-request temp-file staging with cleanup on drop.

use std::path::{Path, PathBuf};

use mediaconv_core::Config;
use uuid::Uuid;

/// Owns the upload and output directories and allocates per-request paths.
pub struct StagingArea {
    upload_dir: PathBuf,
    converted_dir: PathBuf,
}

impl StagingArea {
    pub fn new(upload_dir: impl Into<PathBuf>, converted_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            converted_dir: converted_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.upload_dir(), config.converted_dir())
    }

    /// Create both directories if missing. Called once at startup.
    pub async fn ensure_dirs(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        tokio::fs::create_dir_all(&self.converted_dir).await?;
        Ok(())
    }

    /// Allocate input/output paths for one request under a fresh identifier.
    ///
    /// The input keeps the original filename's extension so the converter can
    /// sniff the source format from the path; the output extension is the
    /// target format token verbatim.
    pub fn stage(&self, original_filename: &str, target_format: &str) -> StagedPaths {
        let id = Uuid::new_v4();

        let input_name = match Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str())
        {
            Some(ext) => format!("{}.{}", id, ext),
            None => id.to_string(),
        };
        let output_name = format!("{}.{}", id, target_format);

        StagedPaths {
            id,
            input: self.upload_dir.join(input_name),
            output: self.converted_dir.join(output_name),
        }
    }
}

/// The two temp-file paths owned by a single request.
///
/// Dropping the guard removes whichever of the files exist, so cleanup runs
/// on every exit path of the handler. Removal failures are logged and
/// swallowed; they can never affect the response.
pub struct StagedPaths {
    id: Uuid,
    input: PathBuf,
    output: PathBuf,
}

impl StagedPaths {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn output(&self) -> &Path {
        &self.output
    }
}

impl Drop for StagedPaths {
    fn drop(&mut self) {
        for path in [&self.input, &self.output] {
            if path.exists() {
                if let Err(err) = std::fs::remove_file(path) {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "Failed to remove staged file"
                    );
                }
            }
        }
    }
}

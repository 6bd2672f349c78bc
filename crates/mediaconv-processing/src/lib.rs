//! Media conversion capability and per-request temp-file staging.
//!
//! The actual transcoding is delegated to an external converter binary
//! (ffmpeg) behind the [`Converter`] trait; this crate owns the process
//! invocation and the lifecycle of the staged input/output files.

pub mod convert;
pub mod staging;

pub use convert::{ConvertError, Converter, FfmpegConverter};
pub use staging::{StagedPaths, StagingArea};

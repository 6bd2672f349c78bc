//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use mediaconv_core::Config;
use mediaconv_processing::{FfmpegConverter, StagingArea};
use std::sync::Arc;

/// Initialize the entire application
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, axum::Router)> {
    // Validate configuration first - fail fast on misconfiguration
    config.validate().context("Configuration validation failed")?;

    let staging = StagingArea::from_config(&config);
    staging
        .ensure_dirs()
        .await
        .context("Failed to create staging directories")?;

    let converter = Arc::new(FfmpegConverter::new(config.ffmpeg_path()));

    let state = Arc::new(AppState {
        config: config.clone(),
        staging: Arc::new(staging),
        converter,
    });

    let router = routes::build_router(&config, state.clone());

    Ok((state, router))
}

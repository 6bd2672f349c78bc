//! Core types shared across the mediaconv crates: configuration and the
//! application error taxonomy.

pub mod config;
pub mod error;

pub use config::{Config, ServiceConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};

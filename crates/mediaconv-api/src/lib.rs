//! Mediaconv API Library
//!
//! This crate provides the HTTP handlers, application state, and setup for
//! the conversion service.

// Module declarations
mod api_doc;
mod handlers;
mod utils;

// Public modules
pub mod error;
pub mod setup;
pub mod state;
pub mod telemetry;

// Re-exports
pub use error::HttpAppError;
pub use state::AppState;

//! Application state shared by all handlers.
//!
//! Everything in here is immutable after startup; requests never share
//! mutable data, so no locks are needed.

use mediaconv_core::Config;
use mediaconv_processing::{Converter, StagingArea};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub staging: Arc<StagingArea>,
    pub converter: Arc<dyn Converter>,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}

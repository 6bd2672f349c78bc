//! Tracing initialization.

use tracing_subscriber::{
    fmt::format::Format, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Install the console subscriber. Honors `RUST_LOG`; defaults to debug for
/// the service crates and tower-http request traces.
pub fn init_tracing() {
    let console_fmt = tracing_subscriber::fmt::layer().event_format(
        Format::default()
            .compact()
            .with_target(false)
            .without_time(),
    );

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "mediaconv_api=debug,mediaconv_processing=debug,mediaconv_core=debug,tower_http=debug"
                .into()
        }))
        .with(console_fmt)
        .init();
}

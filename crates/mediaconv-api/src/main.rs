use mediaconv_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    mediaconv_api::telemetry::init_tracing();

    // Initialize the application (staging directories, converter, routes)
    let (_state, router) = mediaconv_api::setup::initialize_app(config.clone()).await?;

    // Start the server
    mediaconv_api::setup::server::start_server(&config, router).await?;

    Ok(())
}

use crate::shutdown;
use linkedscribe::config::Config;
use linkedscribe::error::{server_error, Error};
use linkedscribe::generator::PostGenerator;
use linkedscribe::web::{self, AppState};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| server_error(&format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => {
            if config.gemini_api_key.is_none() {
                warn!("GEMINI_API_KEY is not set, generation requests will be refused");
            }
            Ok(config)
        }
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Build the router and serve it until a shutdown signal arrives
pub async fn start_server(config: Config) -> miette::Result<()> {
    let state = AppState::new(PostGenerator::from_config(&config));
    let app = web::router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::from)?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(|e| server_error(&e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

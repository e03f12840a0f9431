mod shutdown;
mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Load environment variables before the log filter is read
    dotenvy::dotenv().ok();

    // Initialize logging
    startup::init_logging()?;

    info!("Starting LinkedScribe");

    // Load configuration
    let config = startup::load_config()?;

    // Serve the form
    startup::start_server(config).await
}

use navibus_client::backend::HttpBackend;
use navibus_client::config::Settings;
use navibus_client::search::RouteSearchClient;
use navibus_client::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "NaviBus route search stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env();

    let backend = HttpBackend::new(settings.backend.clone())?;
    let state = AppState::new(RouteSearchClient::new(backend));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await?;
    info!(
        addr = %settings.bind_addr,
        api = %settings.backend.base_url,
        "NaviBus route search listening"
    );
    info!("  GET /health                          - Health check");
    info!("  GET /api/routes/search?start=&end=   - Search routes between two stops");

    axum::serve(listener, app).await?;
    Ok(())
}

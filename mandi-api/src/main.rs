//! Farmer Market Price API server binary

use mandi_agmarknet::AgmarknetClient;
use mandi_api::{app, AppState};
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from a .env file
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mandi_api=debug")),
        )
        .init();

    info!("Starting Farmer Market Price API");

    // Read the upstream credential; its absence is handled at request
    // time, not treated as a startup failure.
    let api_key = std::env::var("DATA_GOV_API_KEY").ok();
    if api_key.as_deref().is_some_and(|key| !key.is_empty()) {
        info!("data.gov.in API credential found in environment");
    } else {
        warn!("DATA_GOV_API_KEY not set; price lookups will return a configuration error");
    }

    let agmarknet = AgmarknetClient::new(api_key);
    let state = AppState { agmarknet };
    let app = app(state);

    // Start server
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::net::SocketAddr;

use bus_server::catalog::Catalog;
use bus_server::web::{AppState, create_router};

/// Default catalog location, relative to the working directory.
const DEFAULT_DATA_PATH: &str = "data/bus_timings.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bus_server=info".into()),
        )
        .init();

    // Catalog path from environment, with a sensible default
    let data_path =
        std::env::var("BUS_DATA_PATH").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());

    // Load the catalog (fail fast: no catalog, no service)
    let catalog = Catalog::load(&data_path).expect("Failed to load route catalog");
    tracing::info!(path = %data_path, routes = catalog.len(), "loaded route catalog");

    // Build app state and router
    let state = AppState::new(catalog);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 8000));
    tracing::info!("bus query service listening on http://{addr}");
    tracing::info!("  GET /     - Health check");
    tracing::info!("  GET /bus  - Departure times for ?destination=<name>");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
